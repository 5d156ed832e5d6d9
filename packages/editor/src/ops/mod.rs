//! Edit operations on dashboard documents.
//!
//! Each function takes the current document and returns a new one. Moves
//! are built from two primitive edits applied in sequence.

pub mod cards;
pub mod sections;
pub mod views;

pub use cards::{
    add_card, add_cards, delete_card, find_card, insert_card, move_card, move_card_to_container,
    move_card_to_index, replace_card,
};
pub use sections::{add_section, delete_section, insert_section, move_section};
pub use views::{add_view, delete_view, replace_view, swap_view};
