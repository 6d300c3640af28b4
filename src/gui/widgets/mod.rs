use iced::{
    Alignment::Center,
    Element, Length,
    widget::{column, container, row, text},
};

use super::Message;

/// Sidebar with the controls on the left, main content on the right
pub fn layout<'a>(
    sidebar: impl Into<Element<'a, Message>>,
    main_content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    container(row![
        container(sidebar.into())
            .style(container::bordered_box)
            .padding(16)
            .height(Length::Fill)
            .width(Length::FillPortion(1)),
        container(main_content.into())
            .padding(16)
            .width(Length::FillPortion(4)),
    ])
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

/// An image with a fixed caption underneath
pub fn captioned<'a>(handle: iced::widget::image::Handle, caption: &'a str) -> Element<'a, Message> {
    column![
        iced::widget::image(handle).width(Length::Fill),
        text(caption).size(14),
    ]
    .spacing(4)
    .align_x(Center)
    .width(Length::FillPortion(1))
    .into()
}
