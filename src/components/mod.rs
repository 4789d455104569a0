//! UI components for the card.

mod audio_controls;
mod balloons;
mod birthday_stage;
mod confetti_overlay;
mod gift_stage;
mod message_stage;

pub use audio_controls::AudioControls;
pub use balloons::Balloons;
pub use birthday_stage::BirthdayStage;
pub use confetti_overlay::{
    scatter, use_confetti_pieces, ChannelRenderer, ConfettiOverlay, ConfettiPiece,
};
pub use gift_stage::GiftStage;
pub use message_stage::MessageStage;
