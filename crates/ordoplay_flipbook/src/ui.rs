// SPDX-License-Identifier: MIT OR Apache-2.0
//! Inspector panel for flipbook animations.
//!
//! Shows playback status and configuration of the selected animations.
//! While the host is in play mode it also offers Play/Pause and
//! Resume/Stop buttons that run on every selected animation.

use crate::animation::SequenceAnimation;
use crate::command::PlaybackCommand;
use crate::config::{AnimationConfig, INFINITE_LOOPS};
use crate::lifecycle::{OnActivateBehavior, OnDeactivateBehavior};
use crate::sequence::FrameSequence;
use crate::sink::FrameSink;

const MAX_FRAMES_PER_SECOND: f32 = 240.0;

/// Button layout of the playback controls, one inner array per row
pub const CONTROL_ROWS: [[PlaybackCommand; 2]; 2] = [
    [PlaybackCommand::Play, PlaybackCommand::Pause],
    [PlaybackCommand::Resume, PlaybackCommand::Stop],
];

/// Run `command` on every target. Returns how many accepted it.
pub fn apply_to_targets<F, S: FrameSink<F>>(
    targets: &mut [&mut SequenceAnimation<F, S>],
    command: PlaybackCommand,
) -> usize {
    targets
        .iter_mut()
        .map(|target| target.apply(command))
        .filter(Result::is_ok)
        .count()
}

/// Inspector for one or more selected animations
#[derive(Debug, Clone)]
pub struct SequenceAnimationInspector {
    /// Show the playback status section
    pub show_status: bool,
}

impl SequenceAnimationInspector {
    /// Create a new inspector
    pub fn new() -> Self {
        Self { show_status: true }
    }

    /// Render the inspector.
    ///
    /// Config edits are applied field by field to every target. Playback
    /// buttons appear only when `host_playing` is set. Returns the command
    /// that was clicked, after it has been run on every target.
    pub fn ui<F, S: FrameSink<F>>(
        &mut self,
        ui: &mut egui::Ui,
        targets: &mut [&mut SequenceAnimation<F, S>],
        host_playing: bool,
    ) -> Option<PlaybackCommand> {
        let Some(primary) = targets.first() else {
            ui.label("No animation selected");
            return None;
        };

        if targets.len() > 1 {
            ui.label(format!("{} animations selected", targets.len()));
        } else {
            ui.heading(primary.name());
        }
        ui.separator();

        if self.show_status {
            Self::status_section(ui, primary);
            ui.separator();
        }

        let before = *primary.config();
        let mut edited = before;
        Self::config_section(ui, &mut edited);
        if edited != before {
            for target in targets.iter_mut() {
                apply_config_edit(target, &before, &edited);
            }
        }

        if !host_playing {
            return None;
        }

        ui.separator();
        let command = Self::controls_section(ui);
        if let Some(command) = command {
            let accepted = apply_to_targets(targets, command);
            tracing::debug!(
                command = command.display_name(),
                accepted,
                selected = targets.len(),
                "Inspector playback command"
            );
        }
        command
    }

    fn status_section<F, S: FrameSink<F>>(ui: &mut egui::Ui, animation: &SequenceAnimation<F, S>) {
        let frame_count = animation.sequence().map_or(0, FrameSequence::len);

        egui::Grid::new("flipbook_status")
            .num_columns(2)
            .show(ui, |ui| {
                ui.label("State");
                ui.label(if animation.is_playing() { "Playing" } else { "Idle" });
                ui.end_row();

                ui.label("Frame");
                if frame_count == 0 {
                    ui.label("No sequence");
                } else {
                    ui.label(format!("{} / {}", animation.current_frame_index() + 1, frame_count));
                }
                ui.end_row();

                ui.label("Loops");
                if animation.config().is_infinite() {
                    ui.label("∞");
                } else {
                    ui.label(format!("{} / {}", animation.completed_loops(), animation.loops()));
                }
                ui.end_row();
            });

        if frame_count > 0 {
            let progress = animation.current_frame_index() as f32 / frame_count as f32;
            ui.add(egui::ProgressBar::new(progress));
        }
    }

    fn config_section(ui: &mut egui::Ui, config: &mut AnimationConfig) {
        egui::Grid::new("flipbook_config")
            .num_columns(2)
            .show(ui, |ui| {
                ui.label("On Activate");
                egui::ComboBox::from_id_salt("flipbook_on_activate")
                    .selected_text(config.on_activate.display_name())
                    .show_ui(ui, |ui| {
                        for behavior in OnActivateBehavior::all() {
                            ui.selectable_value(&mut config.on_activate, *behavior, behavior.display_name());
                        }
                    });
                ui.end_row();

                ui.label("On Deactivate");
                egui::ComboBox::from_id_salt("flipbook_on_deactivate")
                    .selected_text(config.on_deactivate.display_name())
                    .show_ui(ui, |ui| {
                        for behavior in OnDeactivateBehavior::all() {
                            ui.selectable_value(&mut config.on_deactivate, *behavior, behavior.display_name());
                        }
                    });
                ui.end_row();

                ui.label("FPS");
                ui.add(
                    egui::DragValue::new(&mut config.frames_per_second)
                        .range(0.0..=MAX_FRAMES_PER_SECOND)
                        .speed(0.1),
                );
                ui.end_row();

                ui.label("Loops").on_hover_text("Set to -1 for infinite loops");
                ui.add(egui::DragValue::new(&mut config.loops).range(INFINITE_LOOPS..=i32::MAX));
                ui.end_row();
            });
    }

    fn controls_section(ui: &mut egui::Ui) -> Option<PlaybackCommand> {
        let mut clicked = None;
        for row in CONTROL_ROWS {
            ui.horizontal(|ui| {
                for command in row {
                    if ui.button(command.display_name()).clicked() {
                        clicked = Some(command);
                    }
                }
            });
        }
        clicked
    }
}

impl Default for SequenceAnimationInspector {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_config_edit<F, S: FrameSink<F>>(
    target: &mut SequenceAnimation<F, S>,
    before: &AnimationConfig,
    edited: &AnimationConfig,
) {
    if edited.frames_per_second != before.frames_per_second {
        target.set_frames_per_second(edited.frames_per_second);
    }
    if edited.loops != before.loops {
        target.set_loops(edited.loops);
    }
    if edited.on_activate != before.on_activate {
        target.set_on_activate_behavior(edited.on_activate);
    }
    if edited.on_deactivate != before.on_deactivate {
        target.set_on_deactivate_behavior(edited.on_deactivate);
    }
}
