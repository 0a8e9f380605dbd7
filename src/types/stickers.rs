use serde::{Deserialize, Serialize};

use crate::types::{
    media::{File, PhotoSize},
    util::Float,
};

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Sticker {
    pub file_id: String,
    pub file_unique_id: String,
    pub width: u32,
    pub height: u32,
    pub is_animated: bool,
    pub is_video: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb: Option<PhotoSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_name: Option<String>,
    /// Premium animation for premium regular stickers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium_animation: Option<File>,
    /// For mask stickers, where the mask goes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask_position: Option<MaskPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct StickerSet {
    pub name: String,
    pub title: String,
    pub is_animated: bool,
    pub is_video: bool,
    pub contains_masks: bool,
    pub stickers: Vec<Sticker>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb: Option<PhotoSize>,
}

/// The face part a mask is placed relative to.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskPoint {
    Forehead,
    Eyes,
    Mouth,
    Chin,
}

/// Position of a mask on faces.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct MaskPosition {
    pub point: MaskPoint,
    /// Shift by X-axis measured in widths of the mask scaled to the face.
    pub x_shift: Float,
    pub y_shift: Float,
    pub scale: Float,
}
