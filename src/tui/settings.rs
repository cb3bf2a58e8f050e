//! The settings form: two minute sliders for the Work and Break durations.
//!
//! The form does not know about the countdown. Applying it sends a
//! [`DurationChange`] over a channel; whoever owns the receiving end decides
//! what to do with it.

use std::sync::mpsc::Sender;

use tracing::debug;

use crate::error::PomoError;
use crate::timer::Mode;

/// Lowest selectable duration in minutes.
pub const SLIDER_MIN: u8 = 0;
/// Highest selectable duration in minutes.
pub const SLIDER_MAX: u8 = 60;
/// Distance between slider tick marks.
pub const TICK_INTERVAL: u8 = 5;

/// New durations confirmed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationChange {
    pub work_minutes: i64,
    pub break_minutes: i64,
}

fn clamp_to_range(value: i64) -> u8 {
    let clamped = value.clamp(i64::from(SLIDER_MIN), i64::from(SLIDER_MAX));
    u8::try_from(clamped).unwrap_or(SLIDER_MAX)
}

/// A bounded integer slider.
///
/// The slider remembers the value it was created with. Until it is moved it
/// reports that seed unchanged, even when the seed lies outside the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slider {
    value: u8,
    seed: i64,
    touched: bool,
}

impl Slider {
    /// Create a slider at `value`; the knob is clamped into range.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self {
            value: clamp_to_range(value),
            seed: value,
            touched: false,
        }
    }

    /// Knob position.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// The minutes this slider stands for: the seed until moved, then the
    /// knob position.
    #[must_use]
    pub fn minutes(&self) -> i64 {
        if self.touched {
            i64::from(self.value)
        } else {
            self.seed
        }
    }

    /// Move by `delta`, staying within range.
    pub fn adjust(&mut self, delta: i64) {
        self.set(clamp_to_range(i64::from(self.value) + delta));
    }

    /// Jump to the lowest value.
    pub fn to_min(&mut self) {
        self.set(SLIDER_MIN);
    }

    /// Jump to the highest value.
    pub fn to_max(&mut self) {
        self.set(SLIDER_MAX);
    }

    fn set(&mut self, value: u8) {
        self.value = value;
        self.touched = true;
    }

    /// Position within the range (0.0 - 1.0).
    #[must_use]
    pub fn ratio(&self) -> f64 {
        f64::from(self.value - SLIDER_MIN) / f64::from(SLIDER_MAX - SLIDER_MIN)
    }
}

/// The settings form.
#[derive(Debug)]
pub struct SettingsForm {
    work: Slider,
    break_slider: Slider,
    focused: Mode,
    visible: bool,
    tx: Sender<DurationChange>,
}

impl SettingsForm {
    /// Create a hidden form with sliders at the given minutes.
    #[must_use]
    pub fn new(work_minutes: i64, break_minutes: i64, tx: Sender<DurationChange>) -> Self {
        Self {
            work: Slider::new(work_minutes),
            break_slider: Slider::new(break_minutes),
            focused: Mode::Work,
            visible: false,
            tx,
        }
    }

    /// Put the form on screen.
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hide the form, keeping slider values for next time.
    pub fn close(&mut self) {
        self.visible = false;
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// The slider that receives adjustments.
    #[must_use]
    pub const fn focused(&self) -> Mode {
        self.focused
    }

    /// Move focus to the other slider.
    pub fn focus_next(&mut self) {
        self.focused = self.focused.other();
    }

    /// The slider for `mode`.
    #[must_use]
    pub const fn slider(&self, mode: Mode) -> &Slider {
        match mode {
            Mode::Work => &self.work,
            Mode::Break => &self.break_slider,
        }
    }

    /// The focused slider.
    pub fn focused_slider_mut(&mut self) -> &mut Slider {
        match self.focused {
            Mode::Work => &mut self.work,
            Mode::Break => &mut self.break_slider,
        }
    }

    /// The durations the form would send. Untouched sliders keep their
    /// seed.
    #[must_use]
    pub fn current(&self) -> DurationChange {
        DurationChange {
            work_minutes: self.work.minutes(),
            break_minutes: self.break_slider.minutes(),
        }
    }

    /// Send the slider values and hide the form.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::Channel` if the receiving side is gone.
    pub fn apply(&mut self) -> Result<DurationChange, PomoError> {
        let change = self.current();
        self.tx
            .send(change)
            .map_err(|e| PomoError::Channel(format!("Failed to deliver settings: {e}")))?;
        debug!(
            work_minutes = change.work_minutes,
            break_minutes = change.break_minutes,
            "settings applied"
        );
        self.close();
        Ok(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_slider_clamps() {
        assert_eq!(Slider::new(-5).value(), 0);
        assert_eq!(Slider::new(75).value(), 60);
        assert_eq!(Slider::new(i64::MAX).value(), 60);

        let mut slider = Slider::new(58);
        slider.adjust(i64::from(TICK_INTERVAL));
        assert_eq!(slider.value(), 60);
        slider.adjust(-100);
        assert_eq!(slider.value(), 0);
    }

    #[test]
    fn test_untouched_slider_keeps_out_of_range_seed() {
        let mut slider = Slider::new(90);
        assert_eq!(slider.value(), 60);
        assert_eq!(slider.minutes(), 90);

        slider.adjust(-1);
        assert_eq!(slider.minutes(), 59);

        let mut slider = Slider::new(90);
        slider.to_max();
        assert_eq!(slider.minutes(), 60);
    }

    #[test]
    fn test_slider_bounds_and_ratio() {
        let mut slider = Slider::new(30);
        assert!((slider.ratio() - 0.5).abs() < f64::EPSILON);

        slider.to_max();
        assert_eq!(slider.value(), SLIDER_MAX);
        slider.to_min();
        assert_eq!(slider.value(), SLIDER_MIN);
        assert!(slider.ratio().abs() < f64::EPSILON);
    }

    #[test]
    fn test_form_starts_hidden_on_work() {
        let (tx, _rx) = mpsc::channel();
        let form = SettingsForm::new(15, 5, tx);

        assert!(!form.is_visible());
        assert_eq!(form.focused(), Mode::Work);
        assert_eq!(
            form.current(),
            DurationChange {
                work_minutes: 15,
                break_minutes: 5
            }
        );
    }

    #[test]
    fn test_focus_and_adjust() {
        let (tx, _rx) = mpsc::channel();
        let mut form = SettingsForm::new(15, 5, tx);

        form.focused_slider_mut().adjust(-5);
        form.focus_next();
        form.focused_slider_mut().adjust(1);

        assert_eq!(form.focused(), Mode::Break);
        assert_eq!(form.slider(Mode::Work).value(), 10);
        assert_eq!(form.slider(Mode::Break).value(), 6);
    }

    #[test]
    fn test_apply_sends_and_hides() {
        let (tx, rx) = mpsc::channel();
        let mut form = SettingsForm::new(10, 3, tx);
        form.show();

        let change = form.apply().unwrap();

        assert!(!form.is_visible());
        assert_eq!(rx.try_recv().unwrap(), change);
        assert_eq!(change.work_minutes, 10);
        assert_eq!(change.break_minutes, 3);
    }

    #[test]
    fn test_apply_untouched_sends_seeds() {
        let (tx, rx) = mpsc::channel();
        let mut form = SettingsForm::new(90, 5, tx);
        form.show();

        form.apply().unwrap();

        assert_eq!(
            rx.try_recv().unwrap(),
            DurationChange {
                work_minutes: 90,
                break_minutes: 5
            }
        );
    }

    #[test]
    fn test_close_keeps_values() {
        let (tx, rx) = mpsc::channel();
        let mut form = SettingsForm::new(15, 5, tx);
        form.show();
        form.focused_slider_mut().to_max();
        form.close();

        assert!(rx.try_recv().is_err());
        form.show();
        assert_eq!(form.slider(Mode::Work).value(), 60);
    }

    #[test]
    fn test_apply_without_receiver_is_an_error() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut form = SettingsForm::new(15, 5, tx);

        let err = form.apply().unwrap_err();
        assert!(matches!(err, PomoError::Channel(_)));
    }
}
