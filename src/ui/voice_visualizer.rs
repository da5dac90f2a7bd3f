// SPDX-License-Identifier: MPL-2.0
//! Voice-recording visualizer.
//!
//! Three exclusive phases: idle, recording, recorded. While recording, a
//! bounded buffer of synthetic waveform samples is refreshed on a fixed
//! tick. The amplitudes are cosmetic randomness for visual feedback only;
//! no audio is captured or analyzed, and nothing here should ever be
//! mistaken for amplitude measurement.
//!
//! The maximum recording duration is caller-enforced: the tick handler
//! reports [`Event::MaxDurationReached`] and the parent decides to stop.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, Column, Row, Space, Text};
use iced::{Alignment, Element, Length};
use rand::Rng;
use std::collections::VecDeque;
use std::time::Duration;

/// Number of samples kept for display (the last N ticks).
pub const MAX_WAVEFORM_SAMPLES: usize = 20;

/// Interval between waveform refreshes while recording.
pub const SAMPLE_INTERVAL: Duration = Duration::from_millis(150);

/// Default cap on recording length, enforced by the caller.
pub const DEFAULT_MAX_DURATION_SECS: u64 = 60;

/// Display phase of the recorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Recording,
    Recorded,
}

#[derive(Debug, Clone)]
pub enum Message {
    StartRecording,
    StopRecording,
    Discard,
    /// Fired by the subscription timer while recording.
    Tick,
}

/// Events propagated to the parent component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The recording hit the caller-enforced maximum duration.
    MaxDurationReached,
}

#[derive(Debug, Clone, PartialEq)]
pub struct State {
    phase: Phase,
    waveform: VecDeque<f32>,
    elapsed: Duration,
    max_duration: Duration,
}

impl State {
    pub fn new() -> Self {
        Self::with_max_duration(Duration::from_secs(DEFAULT_MAX_DURATION_SECS))
    }

    pub fn with_max_duration(max_duration: Duration) -> Self {
        Self {
            phase: Phase::Idle,
            waveform: VecDeque::with_capacity(MAX_WAVEFORM_SAMPLES),
            elapsed: Duration::ZERO,
            max_duration,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_recording(&self) -> bool {
        self.phase == Phase::Recording
    }

    pub fn waveform(&self) -> impl Iterator<Item = f32> + '_ {
        self.waveform.iter().copied()
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed.as_secs()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::StartRecording => {
                if self.phase != Phase::Recording {
                    self.phase = Phase::Recording;
                    self.waveform.clear();
                    self.elapsed = Duration::ZERO;
                }
                Event::None
            }
            Message::StopRecording => {
                if self.phase == Phase::Recording {
                    self.phase = Phase::Recorded;
                }
                Event::None
            }
            Message::Discard => {
                self.phase = Phase::Idle;
                self.waveform.clear();
                self.elapsed = Duration::ZERO;
                Event::None
            }
            Message::Tick => {
                if self.phase != Phase::Recording {
                    return Event::None;
                }
                self.elapsed += SAMPLE_INTERVAL;
                self.push_sample(cosmetic_amplitude());
                if self.elapsed >= self.max_duration {
                    Event::MaxDurationReached
                } else {
                    Event::None
                }
            }
        }
    }

    fn push_sample(&mut self, amplitude: f32) {
        if self.waveform.len() == MAX_WAVEFORM_SAMPLES {
            self.waveform.pop_front();
        }
        self.waveform.push_back(amplitude);
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// Cosmetic randomness for the waveform display.
///
/// Deliberately unrelated to any audio signal; replace this generator
/// wholesale if real amplitude analysis is ever added.
fn cosmetic_amplitude() -> f32 {
    rand::thread_rng().gen_range(0.1..=1.0)
}

/// Formats a duration in seconds as `M:SS`.
pub fn format_duration(total_secs: u64) -> String {
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Renders the recorder with its waveform bars and transport buttons.
pub fn view<'a>(state: &State, record_label: String, stop_label: String, discard_label: String) -> Element<'a, Message> {
    let mut bars = Row::new().spacing(spacing::XXS).align_y(Alignment::End);
    for amplitude in state.waveform() {
        bars = bars.push(
            container(
                Space::new()
                    .width(Length::Fixed(sizing::WAVEFORM_BAR_WIDTH))
                    .height(Length::Fixed(sizing::WAVEFORM_MAX_BAR_HEIGHT * amplitude)),
            )
            .style(styles::container::badge),
        );
    }

    let duration = Text::new(format_duration(state.elapsed_secs())).size(typography::SUBTITLE);

    let transport = match state.phase() {
        Phase::Idle => Row::new().push(
            button(Text::new(record_label))
                .on_press(Message::StartRecording)
                .style(styles::button::primary),
        ),
        Phase::Recording => Row::new().push(
            button(Text::new(stop_label))
                .on_press(Message::StopRecording)
                .style(styles::button::primary),
        ),
        Phase::Recorded => Row::new().spacing(spacing::SM).push(
            button(Text::new(record_label))
                .on_press(Message::StartRecording)
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(discard_label))
                .on_press(Message::Discard)
                .style(styles::button::quiet),
        ),
    };

    Column::new()
        .spacing(spacing::SM)
        .push(container(bars).height(Length::Fixed(sizing::WAVEFORM_MAX_BAR_HEIGHT)))
        .push(duration)
        .push(transport)
        .into()
}
