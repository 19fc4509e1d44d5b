pub mod card_animated;
pub mod metric_card;
