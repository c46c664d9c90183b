//! A headless note list: each row hosts an auto-resizing text view, and a
//! composer below the list avoids the keyboard.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use autotext_animation::Easing;
use autotext_core::{LayoutConstraint, LayoutItem, RuntimeHandle, ViewId};
use autotext_foundation::{KeyboardInfo, Notification, NotificationCenter, NotificationSource};
use autotext_graphics::{DrawPrimitive, DrawScopeDefault, Rect, Size};
use autotext_ui::{
    AutoResizingOptions, AutoResizingTextView, AutoResizingTextViewDelegate,
    KeyboardAvoidingTextView, PlaceholderOptions, TextView,
};

const SCREEN: Rect = Rect::new(0.0, 0.0, 320.0, 568.0);
const ROW_WIDTH: f32 = 304.0;
const ROW_MIN_HEIGHT: f32 = 36.0;
const ROW_MAX_HEIGHT: f32 = 96.0;

/// Groups row height changes into list updates, the way a table view
/// batches row animations.
#[derive(Default)]
struct ListUpdates {
    rows: Vec<ViewId>,
    depth: Cell<usize>,
    batches: Cell<u32>,
}

impl ListUpdates {
    fn row_of(&self, view: ViewId) -> Option<usize> {
        self.rows.iter().position(|row| *row == view)
    }
}

impl AutoResizingTextViewDelegate for ListUpdates {
    fn will_change_height(&self, text_view: &TextView, old_height: f32, new_height: f32) {
        if self.depth.replace(self.depth.get() + 1) == 0 {
            log::info!("begin updates");
        }
        log::info!(
            "row {:?}: {old_height} -> {new_height}",
            self.row_of(text_view.id())
        );
    }

    fn did_change_height(&self, text_view: &TextView, _old_height: f32, new_height: f32) {
        let depth = self.depth.get().saturating_sub(1);
        self.depth.set(depth);
        log::debug!(
            "row {:?} settled at {new_height}",
            self.row_of(text_view.id())
        );
        if depth == 0 {
            self.batches.set(self.batches.get() + 1);
            log::info!("end updates");
        }
    }
}

struct Row {
    view: AutoResizingTextView,
    height: Rc<LayoutConstraint>,
}

pub struct MessageList {
    center: Rc<NotificationCenter>,
    rows: Vec<Row>,
    updates: Rc<ListUpdates>,
    // Held for the weak delegate references in each row.
    _delegate: Rc<dyn AutoResizingTextViewDelegate>,
    composer: KeyboardAvoidingTextView,
    composer_bottom: Rc<LayoutConstraint>,
}

impl MessageList {
    pub fn new(runtime: RuntimeHandle, row_count: usize) -> Self {
        let center = Rc::new(NotificationCenter::new());
        let notifications: Rc<dyn NotificationSource> = center.clone();

        let hosts: Vec<Rc<TextView>> = (0..row_count)
            .map(|index| {
                let y = 8.0 + index as f32 * (ROW_MIN_HEIGHT + 8.0);
                Rc::new(
                    TextView::new(Rc::clone(&notifications))
                        .with_frame(Rect::new(8.0, y, ROW_WIDTH, ROW_MIN_HEIGHT)),
                )
            })
            .collect();

        let updates = Rc::new(ListUpdates {
            rows: hosts.iter().map(|host| host.id()).collect(),
            ..ListUpdates::default()
        });
        let delegate: Rc<dyn AutoResizingTextViewDelegate> = updates.clone();

        let options = AutoResizingOptions {
            minimum_height: ROW_MIN_HEIGHT,
            maximum_height: ROW_MAX_HEIGHT,
            animation_duration: Duration::from_millis(250),
            easing: Easing::EaseOut,
        };
        let rows = hosts
            .into_iter()
            .enumerate()
            .map(|(index, host)| {
                let height = LayoutConstraint::height(host.id(), ROW_MIN_HEIGHT);
                let view = AutoResizingTextView::with_options(
                    host,
                    runtime.clone(),
                    PlaceholderOptions {
                        placeholder: Some(format!("Note {}", index + 1)),
                        ..PlaceholderOptions::default()
                    },
                    options,
                );
                view.set_height_constraint(&height);
                view.set_delegate(&delegate);
                Row { view, height }
            })
            .collect();

        let composer_host = Rc::new(
            TextView::new(Rc::clone(&notifications)).with_frame(Rect::new(
                0.0,
                SCREEN.max_y() - 44.0,
                SCREEN.width,
                44.0,
            )),
        );
        let composer_bottom = LayoutConstraint::bottom_to_guide(
            composer_host.id(),
            LayoutItem::BottomLayoutGuide,
            0.0,
        );
        // The composer finds its bottom constraint among these on first use.
        composer_host.set_superview_constraints([&composer_bottom]);
        let composer = KeyboardAvoidingTextView::with_options(
            composer_host,
            PlaceholderOptions {
                placeholder: Some("Reply".to_owned()),
                ..PlaceholderOptions::default()
            },
        );

        Self {
            center,
            rows,
            updates,
            _delegate: delegate,
            composer,
            composer_bottom,
        }
    }

    pub fn type_into(&self, row: usize, text: &str) {
        if let Some(row) = self.rows.get(row) {
            row.view.text_view().insert_text(text);
        }
    }

    pub fn clear(&self, row: usize) {
        if let Some(row) = self.rows.get(row) {
            row.view.text_view().set_text("");
        }
    }

    pub fn type_into_composer(&self, text: &str) {
        self.composer.text_view().insert_text(text);
    }

    pub fn show_keyboard(&self, keyboard_height: f32) {
        let hidden = Rect::new(0.0, SCREEN.max_y(), SCREEN.width, keyboard_height);
        let shown = hidden.translate(0.0, -keyboard_height);
        self.center.post(&Notification::KeyboardWillShow(
            KeyboardInfo::new(hidden, shown).with_animation_duration(Duration::from_millis(250)),
        ));
        log::info!("composer bottom inset {}", self.composer_bottom.constant());
    }

    pub fn hide_keyboard(&self) {
        let shown = Rect::new(0.0, SCREEN.max_y() - 216.0, SCREEN.width, 216.0);
        let hidden = shown.translate(0.0, 216.0);
        self.center
            .post(&Notification::KeyboardWillHide(KeyboardInfo::new(shown, hidden)));
        log::info!("composer bottom inset {}", self.composer.current_bottom_inset());
    }

    pub fn print_summary(&self) {
        println!("{} list update batches", self.updates.batches.get());
        for (index, row) in self.rows.iter().enumerate() {
            let mut scope = DrawScopeDefault::new(Size::new(ROW_WIDTH, row.height.constant()));
            row.view.placeholder().draw(&mut scope);
            let shown = scope.primitives().iter().find_map(|primitive| match primitive {
                DrawPrimitive::Text { text, .. } => Some(text.as_str()),
                DrawPrimitive::Rect { .. } => None,
            });
            println!(
                "row {index}: height {:>5.1}  text {:?}  placeholder {:?}",
                row.height.constant(),
                row.view.text_view().text(),
                shown
            );
        }
        println!(
            "composer: text {:?}  bottom inset {}",
            self.composer.text_view().text(),
            self.composer.current_bottom_inset()
        );
    }
}
