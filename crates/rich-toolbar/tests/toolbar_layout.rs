//! Integration tests for toolbar layout and rebuild behavior.

use std::sync::Arc;

use parking_lot::Mutex;
use rich_toolbar::prelude::*;

fn text_options(labels: &[&str]) -> Vec<Arc<dyn RichEditorOption>> {
    labels
        .iter()
        .map(|label| Arc::new(CustomOption::text(*label, |_, _| {})) as Arc<dyn RichEditorOption>)
        .collect()
}

#[test]
fn test_three_unmeasured_buttons_stretch_to_frame() {
    let toolbar = RichEditorToolbar::new(Rect::new(0.0, 0.0, 320.0, 44.0));
    toolbar.set_options(text_options(&["Bold", "Italic", "Underline"]));

    let layout = toolbar.layout();
    assert_eq!(layout.total_width(), 150.0);
    assert_eq!(toolbar.content_width(), 320.0);
    assert_eq!(toolbar.scroll_content_width(), 150.0);
    assert_eq!(layout.mode(), LayoutMode::Stretched);
    assert_eq!(layout.row_frame().height(), 44.0);
}

#[test]
fn test_six_unmeasured_buttons_overflow_and_scroll() {
    let toolbar = RichEditorToolbar::new(Rect::new(0.0, 0.0, 200.0, 44.0));
    toolbar.set_options(text_options(&["A", "B", "C", "D", "E", "F"]));

    assert_eq!(toolbar.content_width(), 300.0);
    assert_eq!(toolbar.scroll_content_width(), 300.0);
    assert!(toolbar.layout().is_scrollable());
}

#[test]
fn test_buttons_follow_option_order() {
    let toolbar = RichEditorToolbar::new(Rect::new(0.0, 0.0, 320.0, 44.0));
    let star = CustomOption::image(Image::named("star", Size::new(24.0, 24.0)), |_, _| {}).with_tag(9);
    let options: Vec<Arc<dyn RichEditorOption>> = vec![
        Arc::new(DefaultOption::Bold) as Arc<dyn RichEditorOption>,
        Arc::new(star),
        Arc::new(DefaultOption::Link),
    ];
    toolbar.set_options(options);

    let buttons = toolbar.buttons();
    assert_eq!(buttons.len(), toolbar.options().len());
    assert_eq!(buttons[0].title(), Some("Bold"));
    assert_eq!(buttons[1].tag(), 9);
    assert!(buttons[1].is_toggleable());
    assert_eq!(buttons[2].title(), Some("Link"));
}

#[test]
fn test_rebuild_with_same_options_is_idempotent() {
    let toolbar = RichEditorToolbar::new(Rect::new(0.0, 0.0, 200.0, 44.0));
    let options = text_options(&["A", "B", "C", "D", "E"]);

    toolbar.set_options(options.clone());
    let first_layout = toolbar.layout();
    let first_titles: Vec<_> = toolbar.buttons().iter().map(|b| b.title().map(String::from)).collect();

    toolbar.set_options(options);
    let second_titles: Vec<_> = toolbar.buttons().iter().map(|b| b.title().map(String::from)).collect();

    assert_eq!(toolbar.layout(), first_layout);
    assert_eq!(first_titles, second_titles);
}

#[test]
fn test_measured_widths_and_tag_fallbacks_from_config() {
    let config = ToolbarConfig::from_toml_str(
        r#"
        button_margin = 2.0

        [[fallback_widths]]
        tag = 5
        width = 90.0
        "#,
    )
    .unwrap();
    let toolbar = RichEditorToolbar::with_config(Rect::new(0.0, 0.0, 100.0, 40.0), &config).unwrap();

    let wide = CustomOption::text("Wide", |_, _| {}).with_tag(5);
    let options = vec![
        Arc::new(wide) as Arc<dyn RichEditorOption>,
        Arc::new(DefaultOption::Bold),
    ];
    toolbar.set_options(options);

    // 90 + 2 for the tagged button, 50 + 2 for the other.
    assert_eq!(toolbar.content_width(), 144.0);

    toolbar.button(1).unwrap().set_measured_width(20.0);
    toolbar.relayout();
    assert_eq!(toolbar.content_width(), 114.0);
}

#[test]
fn test_signals_report_rebuilds() {
    let toolbar = RichEditorToolbar::new(Rect::new(0.0, 0.0, 320.0, 44.0));
    let counts = Arc::new(Mutex::new(Vec::new()));
    let widths = Arc::new(Mutex::new(Vec::new()));

    let counts_clone = counts.clone();
    toolbar.options_changed.connect(move |&n| counts_clone.lock().push(n));
    let widths_clone = widths.clone();
    toolbar
        .layout_changed
        .connect(move |layout| widths_clone.lock().push(layout.content_width()));

    toolbar.set_options(text_options(&["A", "B"]));
    toolbar.set_options(Vec::new());

    assert_eq!(*counts.lock(), vec![2, 0]);
    assert_eq!(*widths.lock(), vec![320.0, 0.0]);
}

#[test]
fn test_slot_may_read_toolbar_during_rebuild_signal() {
    let toolbar = RichEditorToolbar::new(Rect::new(0.0, 0.0, 320.0, 44.0));
    let seen = Arc::new(Mutex::new(None));

    let weak = Arc::downgrade(&toolbar);
    let seen_clone = seen.clone();
    toolbar.options_changed.connect(move |_| {
        if let Some(toolbar) = weak.upgrade() {
            *seen_clone.lock() = Some((toolbar.button_count(), toolbar.content_width()));
        }
    });

    toolbar.set_options(text_options(&["A"]));
    assert_eq!(*seen.lock(), Some((1, 320.0)));
}

#[test]
fn test_resize_between_stretch_and_scroll() {
    let toolbar = RichEditorToolbar::with_background_color(Rect::new(0.0, 0.0, 400.0, 44.0), Color::WHITE);
    toolbar.set_options(DefaultOption::all_options()[..4].to_vec());
    assert_eq!(toolbar.content_width(), 400.0);

    toolbar.set_frame(Rect::new(0.0, 0.0, 150.0, 44.0));
    assert_eq!(toolbar.content_width(), 200.0);
    assert_eq!(toolbar.background_color(), Color::WHITE);

    toolbar.set_frame(Rect::new(0.0, 0.0, 150.0, 60.0));
    assert_eq!(toolbar.layout().row_frame().height(), 60.0);
}
