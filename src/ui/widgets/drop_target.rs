// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that turns window file drag-and-drop and presses into
//! intake input events.
//!
//! Winit reports one `FileHovered`/`FileDropped` per file of a gesture. The
//! [`Gesture`] tracker collapses them: one `DragEnter` per hover, and only the
//! first dropped path is forwarded. Every event the target reacts to is
//! captured so no other widget or global listener sees it.

use crate::intake::{InputEvent, RawFile};
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{window, Element, Event, Length, Rectangle, Size};

/// Per-widget drag gesture tracker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gesture {
    hovering: bool,
    dropped: bool,
}

impl Gesture {
    /// Interprets one event.
    ///
    /// Returns `None` when the event does not concern the target, and
    /// `Some(None)` when it does but is swallowed (extra hovered or dropped
    /// files of the same gesture).
    pub fn interpret(&mut self, event: &Event, cursor_over: bool) -> Option<Option<InputEvent>> {
        match event {
            Event::Window(window::Event::FileHovered(_)) => {
                self.dropped = false;
                if self.hovering {
                    Some(None)
                } else {
                    self.hovering = true;
                    Some(Some(InputEvent::DragEnter))
                }
            }
            Event::Window(window::Event::FilesHoveredLeft) => {
                if self.hovering {
                    self.hovering = false;
                    Some(Some(InputEvent::DragLeave))
                } else {
                    Some(None)
                }
            }
            Event::Window(window::Event::FileDropped(path)) => {
                self.hovering = false;
                if self.dropped {
                    Some(None)
                } else {
                    self.dropped = true;
                    Some(Some(InputEvent::Drop(vec![RawFile::from_path(path.clone())])))
                }
            }
            Event::Mouse(mouse_event) => {
                // Any pointer activity means the previous drop gesture is over.
                self.dropped = false;
                match mouse_event {
                    mouse::Event::ButtonPressed(mouse::Button::Left) if cursor_over => {
                        Some(Some(InputEvent::Click))
                    }
                    _ => None,
                }
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }
}

/// A full-area click and drop target around some content.
pub struct DropTarget<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    on_input: Box<dyn Fn(InputEvent) -> Message + 'a>,
}

impl<'a, Message, Theme, Renderer> DropTarget<'a, Message, Theme, Renderer> {
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        on_input: impl Fn(InputEvent) -> Message + 'a,
    ) -> Self {
        Self {
            content: content.into(),
            on_input: Box::new(on_input),
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for DropTarget<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<Gesture>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(Gesture::default())
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let cursor_over = cursor.is_over(layout.bounds());
        let gesture = tree.state.downcast_mut::<Gesture>();

        if let Some(input) = gesture.interpret(event, cursor_over) {
            if let Some(input) = input {
                shell.publish((self.on_input)(input));
            }
            shell.capture_event();
            return;
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        if cursor.is_over(layout.bounds()) {
            return mouse::Interaction::Pointer;
        }
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<DropTarget<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(target: DropTarget<'a, Message, Theme, Renderer>) -> Self {
        Self::new(target)
    }
}

/// Helper function to wrap content in a drop target.
pub fn drop_target<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    on_input: impl Fn(InputEvent) -> Message + 'a,
) -> DropTarget<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    DropTarget::new(content, on_input)
}
