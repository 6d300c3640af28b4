use crate::filters::Upload;

#[derive(Debug, Clone)]
pub enum Message {
    BlurChanged(f32),
    BrightnessChanged(i32),
    EnhanceToggled(bool),
    PickImage,
    /// `None` when the dialog was cancelled
    ImagePicked(Option<Result<Upload, String>>),
}
