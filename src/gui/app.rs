use iced::widget::{button, column, row, scrollable, slider, text, toggler};
use iced::{Element, Task};
use rfd::AsyncFileDialog;

use super::widgets::{captioned, layout};
use super::{AppState, Display, Message};
use crate::controller::{self, ORIGINAL_CAPTION, PROCESSED_CAPTION};
use crate::filters::Upload;
use crate::filters::load::ACCEPTED_EXTENSIONS;
use crate::params::{BLUR_RANGE, BLUR_STEP, BRIGHTNESS_RANGE, FilterParams};

pub struct FilterdeckApp {
    state: AppState,
}

impl FilterdeckApp {
    /// Open the window with `params` as the initial control values
    pub fn run(params: FilterParams) -> iced::Result {
        iced::application(move || Self::new(params), Self::update, Self::view)
            .title(Self::title)
            .run()
    }

    fn new(params: FilterParams) -> Self {
        Self {
            state: AppState::new(params),
        }
    }

    fn title(&self) -> String {
        match &self.state.upload {
            Some(upload) => format!("Filterdeck - {}", upload.name),
            None => "Filterdeck - Image Filter Demo".to_string(),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::BlurChanged(blur) => {
                self.state.params = self.state.params.with_blur(blur);
                self.rerender();
                Task::none()
            }
            Message::BrightnessChanged(brightness) => {
                self.state.params = self.state.params.with_brightness(brightness);
                self.rerender();
                Task::none()
            }
            Message::EnhanceToggled(enhance) => {
                self.state.params = self.state.params.with_enhance(enhance);
                self.rerender();
                Task::none()
            }
            Message::PickImage => Task::perform(
                async {
                    let handle = AsyncFileDialog::new()
                        .set_title("Choose an image")
                        .add_filter("Image", &ACCEPTED_EXTENSIONS)
                        .pick_file()
                        .await?;
                    Some(Upload::read(handle.path()).await.map_err(|e| e.to_string()))
                },
                Message::ImagePicked,
            ),
            Message::ImagePicked(None) => Task::none(),
            Message::ImagePicked(Some(Ok(upload))) => {
                log::info!("Picked {} ({} bytes)", upload.name, upload.bytes.len());
                self.state.upload = Some(upload);
                self.rerender();
                Task::none()
            }
            Message::ImagePicked(Some(Err(message))) => {
                log::error!("{}", message);
                self.state.upload = None;
                self.state.display = Display::Error(message);
                Task::none()
            }
        }
    }

    /// Full recomputation from the current upload and controls
    fn rerender(&mut self) {
        let render = controller::render(self.state.upload.as_ref(), &self.state.params);
        self.state.display = render.into();
    }

    fn view(&self) -> Element<'_, Message> {
        let params = &self.state.params;

        let sidebar = column![
            text("Filter Controls").size(22),
            text(format!("Blurring: {:.1}", params.blur)),
            slider(BLUR_RANGE, params.blur, Message::BlurChanged).step(BLUR_STEP),
            text(format!("Brightness: {}", params.brightness)),
            slider(BRIGHTNESS_RANGE, params.brightness, Message::BrightnessChanged),
            toggler(params.enhance)
                .label("Enhance Details")
                .on_toggle(Message::EnhanceToggled),
        ]
        .spacing(12);

        let output: Element<'_, Message> = match &self.state.display {
            Display::Warning(warning) => text(warning).into(),
            Display::Error(message) => text(message).style(text::danger).into(),
            Display::Images {
                original,
                processed,
            } => row![
                captioned(original.clone(), ORIGINAL_CAPTION),
                captioned(processed.clone(), PROCESSED_CAPTION),
            ]
            .spacing(16)
            .into(),
        };

        let main_content = scrollable(
            column![
                text("Filterdeck").size(32),
                text("Play with image filters").size(18),
                text("Upload Image").size(24),
                button("Choose an image (jpg, png, jpeg)").on_press(Message::PickImage),
                output,
            ]
            .spacing(16),
        );

        layout(sidebar, main_content)
    }
}
