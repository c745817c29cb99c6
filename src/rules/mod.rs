//! Pure rule helpers over read-only piles.
//!
//! - `capacity`: how many cards a super-move can carry
//! - `autoplay`: which exposed cards are safe to promote
//!
//! `Game` calls into these; they never mutate the table.

pub mod autoplay;
pub mod capacity;

pub use autoplay::{find_safe_promotion, safe_foundation, Promotion};
pub use capacity::{max_movable, Capacity};
