use crate::piece::{Piece, PieceKind};
use crate::queue::PieceQueue;
use colored::{Color, ColoredString, Colorize};
use itertools::Itertools;

// =============================================================================
// Console formatting for the queue and the menu
// =============================================================================

pub struct QueueFormatter;

impl QueueFormatter {
    pub fn kind_color(kind: PieceKind) -> Color {
        match kind {
            PieceKind::I => Color::Cyan,
            PieceKind::O => Color::Yellow,
            PieceKind::T => Color::Magenta,
            PieceKind::L => Color::TrueColor {
                r: 255,
                g: 165,
                b: 0,
            },
            PieceKind::J => Color::Blue,
            PieceKind::Z => Color::Red,
            PieceKind::S => Color::Green,
        }
    }

    /// `(kind #id)`, painted as a whole so the plain text stays contiguous.
    pub fn piece(piece: &Piece) -> ColoredString {
        piece.to_string().color(Self::kind_color(piece.kind()))
    }

    pub fn format_queue<const N: usize>(queue: &PieceQueue<N>) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "\n{}\n",
            format!("--- Next pieces queue (capacity: {}) ---", queue.capacity()).bold()
        ));

        let Some(next) = queue.peek() else {
            output.push_str("The queue is empty.\n");
            return output;
        };

        let row = queue.iter().map(Self::piece).join(" ");
        output.push_str(&format!("Queue: [ {} ]\n", row));
        output.push_str(&format!("-> Next to play (front): {}\n", Self::piece(next)));
        output.push_str(&format!(
            "-> Insert position (rear): index {}\n",
            queue.rear_index()
        ));
        output.push_str(&format!("{}\n", "-".repeat(45)));
        output
    }

    pub fn format_menu() -> String {
        format!(
            "\n{}\n1. Play the front piece\n2. Refresh the queue\n0. Quit\nChoose an option: ",
            "--- Actions ---".bold()
        )
    }

    pub fn format_play(played: &Piece, inserted: &Piece) -> String {
        format!(
            "{} {}\n{} {}\n",
            "Played:".green(),
            Self::piece(played),
            "Inserted automatically:".green(),
            Self::piece(inserted)
        )
    }

    pub fn format_refresh() -> String {
        "Queue refreshed.\n".to_string()
    }

    pub fn format_error(message: &str) -> String {
        format!("{} {}\n", "Error:".red().bold(), message)
    }

    pub fn format_goodbye() -> String {
        "Leaving the piece queue. See you!\n".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::PieceFactory;

    #[test]
    fn test_format_full_queue() {
        let mut factory = PieceFactory::seeded(1);
        let queue: PieceQueue = PieceQueue::filled(&mut factory);
        let snapshot = queue.snapshot();

        let output = QueueFormatter::format_queue(&queue);
        assert!(output.contains("capacity: 5"));
        for piece in &snapshot {
            assert!(output.contains(&piece.to_string()));
        }
        assert!(output.contains("Next to play (front)"));
        assert!(output.contains("index 0"));
    }

    #[test]
    fn test_format_keeps_logical_order_after_wrap() {
        let mut factory = PieceFactory::seeded(1);
        let mut queue: PieceQueue = PieceQueue::filled(&mut factory);
        queue.dequeue().unwrap();
        queue.dequeue().unwrap();
        queue.enqueue(factory.generate()).unwrap();

        let output = QueueFormatter::format_queue(&queue);
        let positions: Vec<usize> = queue
            .iter()
            .map(|piece| output.find(&format!("#{})", piece.id())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(output.contains("index 1"));
    }

    #[test]
    fn test_format_empty_queue() {
        let queue: PieceQueue = PieceQueue::new();
        let output = QueueFormatter::format_queue(&queue);
        assert!(output.contains("The queue is empty."));
        assert!(!output.contains("Next to play"));
    }

    #[test]
    fn test_format_play_names_both_pieces() {
        let played = Piece::new(1, PieceKind::Z);
        let inserted = Piece::new(6, PieceKind::L);
        let output = QueueFormatter::format_play(&played, &inserted);
        assert!(output.contains("(Z #1)"));
        assert!(output.contains("(L #6)"));
    }

    #[test]
    fn test_menu_lists_all_options() {
        let menu = QueueFormatter::format_menu();
        assert!(menu.contains("1. Play"));
        assert!(menu.contains("2. Refresh"));
        assert!(menu.contains("0. Quit"));
    }
}
