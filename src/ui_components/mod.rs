pub mod card;
pub mod counters_bar;
pub mod notice;
