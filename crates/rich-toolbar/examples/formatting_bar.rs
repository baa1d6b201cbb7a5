//! Formatting toolbar demo.
//!
//! Builds a toolbar with the stock commands plus a custom image button,
//! binds a console-printing editor and delegate, then simulates a few
//! presses and a resize.
//!
//! Run with: cargo run -p rich-toolbar --example formatting_bar
//!
//! Set `RUST_LOG=rich_toolbar=debug` to see layout decisions.

use std::sync::Arc;

use parking_lot::Mutex;
use rich_toolbar::prelude::*;
use tracing_subscriber::EnvFilter;

/// An editor that keeps a log of applied commands.
#[derive(Default)]
struct ConsoleEditor {
    applied: Mutex<Vec<String>>,
}

impl ConsoleEditor {
    fn apply(&self, command: impl Into<String>) {
        let command = command.into();
        println!("editor: {command}");
        self.applied.lock().push(command);
    }
}

impl EditingTarget for ConsoleEditor {
    fn bold(&self) {
        self.apply("bold");
    }

    fn italic(&self) {
        self.apply("italic");
    }

    fn header(&self, level: u8) {
        self.apply(format!("header {level}"));
    }

    fn undo(&self) {
        self.apply("undo");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rich_toolbar=info")),
        )
        .init();

    let editor = Arc::new(ConsoleEditor::default());
    let delegate = Arc::new(
        ToolbarDelegate::new()
            .on_change_text_color_for_option(|_, option| {
                println!("delegate: pick a text color for {:?}", option);
            })
            .on_insert_link(|toolbar| {
                println!("delegate: show link editor ({} buttons)", toolbar.button_count());
            }),
    );

    let toolbar = RichEditorToolbar::with_background_color(
        Rect::new(0.0, 0.0, 375.0, 44.0),
        Color::from_rgb8(250, 250, 250),
    );
    toolbar.bind(&editor);
    toolbar.set_delegate(&delegate);
    toolbar.set_bar_tint_color(Some(Color::from_rgb8(242, 242, 247)));

    let mut options = DefaultOption::all_options();
    options.push(Arc::new(
        CustomOption::image(Image::named("pin", Size::new(24.0, 24.0)), |_, _| {
            println!("custom: pin toggled");
        })
        .with_selected_image(Image::named("pin-filled", Size::new(24.0, 24.0)))
        .with_title("Pin"),
    ));
    toolbar.set_options(options);

    println!(
        "{} buttons, content width {}, scrolling: {}",
        toolbar.button_count(),
        toolbar.content_width(),
        toolbar.layout().is_scrollable()
    );

    // Bold, H2, Color, Link, then the pin twice.
    for index in [3, 12, 9, 25, 26, 26] {
        toolbar.press(index);
    }

    // The host measures its text buttons narrower than the fallback.
    for button in toolbar.buttons() {
        if let Some(title) = button.title() {
            button.set_measured_width(12.0 + 7.0 * title.len() as f32);
        }
    }
    toolbar.relayout();
    println!("after measuring: content width {}", toolbar.content_width());

    toolbar.set_frame(Rect::new(0.0, 0.0, 2048.0, 44.0));
    println!(
        "after resize: content width {}, scrolling: {}",
        toolbar.content_width(),
        toolbar.layout().is_scrollable()
    );

    println!("editor applied: {:?}", editor.applied.lock());
}
