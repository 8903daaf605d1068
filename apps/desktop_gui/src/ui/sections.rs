//! Per-section rendering. Every function draws one content block from its
//! read-only records; all scroll/reveal state lives in the app, not here.

use std::collections::HashSet;

use content::domain::{ContactMethod, EducationEntry, ExperienceEntry, Hero, Project};
use eframe::egui::{self, CornerRadius, Margin, RichText, Stroke, StrokeKind};

use crate::ui::theme;

const CONTENT_MAX_WIDTH: f32 = 920.0;
const SECTION_PADDING: f32 = 72.0;

/// Plays the hidden/offset -> shown/settled transition. `t` is the animated
/// reveal progress in `[0, 1]`; the block slides up as it fades in.
pub fn reveal_frame(ui: &mut egui::Ui, t: f32, add: impl FnOnce(&mut egui::Ui)) {
    ui.add_space((1.0 - t) * 24.0);
    ui.scope(|ui| {
        ui.set_opacity(0.02 + 0.98 * t);
        add(ui);
    });
}

fn centered(ui: &mut egui::Ui, add: impl FnOnce(&mut egui::Ui)) {
    ui.vertical_centered(|ui| {
        ui.set_max_width(CONTENT_MAX_WIDTH.min(ui.available_width() - 32.0));
        add(ui);
    });
}

fn section_heading(ui: &mut egui::Ui, title: &str) {
    ui.add_space(SECTION_PADDING);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(title)
                .size(34.0)
                .strong()
                .color(theme::TEXT_PRIMARY),
        );
        let underline_width = 56.0;
        let (rect, _) = ui.allocate_exact_size(egui::vec2(underline_width, 3.0), egui::Sense::hover());
        ui.painter()
            .rect_filled(rect, CornerRadius::same(2), theme::ACCENT);
    });
    ui.add_space(28.0);
}

fn card<R>(ui: &mut egui::Ui, add: impl FnOnce(&mut egui::Ui) -> R) -> egui::InnerResponse<R> {
    egui::Frame::new()
        .fill(theme::PANEL)
        .stroke(Stroke::new(1.0, theme::CARD_BORDER))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(Margin::same(18))
        .show(ui, add)
}

fn chip(ui: &mut egui::Ui, label: &str) {
    egui::Frame::new()
        .fill(theme::BACKGROUND)
        .stroke(Stroke::new(1.0, theme::CARD_BORDER))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::symmetric(10, 5))
        .show(ui, |ui| {
            ui.label(RichText::new(label).size(12.0).color(theme::TEXT_MUTED));
        });
}

fn link_button(ui: &mut egui::Ui, label: &str, url: &str) {
    let button = egui::Button::new(RichText::new(label).color(theme::TEXT_PRIMARY))
        .fill(theme::PANEL)
        .stroke(Stroke::new(1.0, theme::CARD_BORDER))
        .corner_radius(CornerRadius::same(8));
    if ui.add(button).clicked() {
        ui.ctx().open_url(egui::OpenUrl::new_tab(url));
    }
}

pub fn hero(ui: &mut egui::Ui, hero: &Hero, role_index: usize) {
    ui.add_space(SECTION_PADDING);
    centered(ui, |ui| {
        let total = ui.available_width();
        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                ui.set_width(total * 0.56);
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        RichText::new("Hi! I'm ")
                            .size(40.0)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    );
                    ui.label(
                        RichText::new(&hero.name)
                            .size(40.0)
                            .strong()
                            .color(theme::ACCENT),
                    );
                });
                for paragraph in &hero.intro {
                    ui.add_space(12.0);
                    ui.label(
                        RichText::new(paragraph)
                            .size(15.0)
                            .color(theme::TEXT_MUTED),
                    );
                }
                ui.add_space(20.0);
                ui.horizontal_wrapped(|ui| {
                    let resume = egui::Button::new(
                        RichText::new("Download Resume")
                            .strong()
                            .color(theme::BACKGROUND),
                    )
                    .fill(theme::ACCENT)
                    .corner_radius(CornerRadius::same(8));
                    if ui.add(resume).clicked() {
                        ui.ctx().open_url(egui::OpenUrl::new_tab(&hero.resume_path));
                    }
                    link_button(ui, "Email", &format!("mailto:{}", hero.email));
                    link_button(ui, "LinkedIn", &hero.linkedin_url);
                    link_button(ui, "GitHub", &hero.github_url);
                });
            });
            ui.add_space(24.0);
            ui.vertical(|ui| {
                role_panel(ui, &hero.roles, role_index);
            });
        });
    });
    ui.add_space(SECTION_PADDING);
}

/// The hero's code-block panel: the role list rendered as source, with the
/// rotator's current label highlighted.
fn role_panel(ui: &mut egui::Ui, roles: &[String], role_index: usize) {
    card(ui, |ui| {
        ui.spacing_mut().item_spacing.y = 4.0;
        ui.label(
            RichText::new("// Portfolio Interface")
                .monospace()
                .color(theme::CODE_GREEN),
        );
        ui.label(
            RichText::new("let roles = [")
                .monospace()
                .color(theme::TEXT_PRIMARY),
        );
        for (index, role) in roles.iter().enumerate() {
            let (color, cursor) = if index == role_index {
                (theme::ACCENT, " █")
            } else {
                (theme::TEXT_MUTED, "")
            };
            ui.label(
                RichText::new(format!("    \"{role}\",{cursor}"))
                    .monospace()
                    .color(color),
            );
        }
        ui.label(
            RichText::new("    loading: true, // Forever Evolving...")
                .monospace()
                .color(theme::CODE_GREEN),
        );
        ui.label(RichText::new("];").monospace().color(theme::TEXT_PRIMARY));
    });
}

pub fn about(ui: &mut egui::Ui, paragraphs: &[String]) {
    section_heading(ui, "ABOUT ME");
    centered(ui, |ui| {
        for paragraph in paragraphs {
            ui.label(
                RichText::new(paragraph)
                    .size(15.0)
                    .color(theme::TEXT_MUTED),
            );
            ui.add_space(14.0);
        }
    });
    ui.add_space(SECTION_PADDING);
}

pub fn experience(ui: &mut egui::Ui, entries: &[ExperienceEntry]) {
    section_heading(ui, "WORK EXPERIENCE");
    centered(ui, |ui| {
        for entry in entries {
            card(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(&entry.company)
                            .size(20.0)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    );
                    if entry.is_current {
                        chip(ui, "Current");
                    }
                });
                ui.label(RichText::new(&entry.duration).size(13.0).color(theme::ACCENT));
                ui.label(
                    RichText::new(&entry.position)
                        .size(15.0)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                );
                ui.label(
                    RichText::new(&entry.location)
                        .size(13.0)
                        .color(theme::TEXT_MUTED),
                );
                ui.add_space(8.0);
                for responsibility in &entry.responsibilities {
                    ui.label(
                        RichText::new(format!("•  {responsibility}"))
                            .size(13.0)
                            .color(theme::TEXT_MUTED),
                    );
                }
            });
            ui.add_space(22.0);
        }
    });
    ui.add_space(SECTION_PADDING);
}

pub fn education(ui: &mut egui::Ui, entries: &[EducationEntry], expanded: &mut HashSet<usize>) {
    section_heading(ui, "EDUCATION");
    centered(ui, |ui| {
        for (index, entry) in entries.iter().enumerate() {
            card(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(&entry.institution)
                            .size(20.0)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    );
                    if entry.is_current {
                        chip(ui, "Current");
                    }
                });
                ui.label(RichText::new(&entry.duration).size(13.0).color(theme::ACCENT));
                ui.label(
                    RichText::new(format!("{}, {}", entry.degree, entry.major))
                        .size(15.0)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                );
                ui.label(
                    RichText::new(&entry.location)
                        .size(13.0)
                        .color(theme::TEXT_MUTED),
                );
                ui.add_space(8.0);

                let is_expanded = expanded.contains(&index);
                let toggle_label = if is_expanded {
                    "Hide coursework"
                } else {
                    "Relevant coursework"
                };
                if ui
                    .add(
                        egui::Button::new(RichText::new(toggle_label).color(theme::ACCENT))
                            .fill(theme::BACKGROUND)
                            .stroke(Stroke::new(1.0, theme::CARD_BORDER))
                            .corner_radius(CornerRadius::same(8)),
                    )
                    .clicked()
                {
                    toggle_courses(expanded, index);
                }

                if is_expanded {
                    ui.add_space(8.0);
                    for course in &entry.courses {
                        ui.label(
                            RichText::new(&course.name)
                                .size(13.0)
                                .strong()
                                .color(theme::TEXT_PRIMARY),
                        );
                        ui.label(
                            RichText::new(&course.description)
                                .size(12.0)
                                .color(theme::TEXT_MUTED),
                        );
                        ui.add_space(6.0);
                    }
                }
            });
            ui.add_space(22.0);
        }
    });
    ui.add_space(SECTION_PADDING);
}

/// Flips one education entry's course list between hidden and shown. Each
/// entry toggles independently.
fn toggle_courses(expanded: &mut HashSet<usize>, index: usize) {
    if !expanded.insert(index) {
        expanded.remove(&index);
    }
}

pub fn skills(ui: &mut egui::Ui, skills: &[String]) {
    section_heading(ui, "TECHNICAL EXPERTISE");
    centered(ui, |ui| {
        ui.label(
            RichText::new(
                "My toolkit. The secret sauce: once you truly get what a tool is \
                 for and why you'd use it, figuring out how is just resourceful \
                 problem-solving.",
            )
            .size(14.0)
            .color(theme::TEXT_MUTED),
        );
        ui.add_space(18.0);
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(10.0, 10.0);
            for skill in skills {
                let tag = egui::Button::new(RichText::new(skill).color(theme::TEXT_PRIMARY))
                    .fill(theme::PANEL)
                    .stroke(Stroke::new(1.0, theme::CARD_BORDER))
                    .corner_radius(CornerRadius::same(8));
                let response = ui.add(tag);
                if response.hovered() {
                    ui.painter().rect_stroke(
                        response.rect,
                        CornerRadius::same(8),
                        Stroke::new(1.0, theme::lighten(theme::ACCENT, 0.25)),
                        StrokeKind::Outside,
                    );
                }
            }
        });
    });
    ui.add_space(SECTION_PADDING);
}

pub fn projects(ui: &mut egui::Ui, projects: &[Project]) {
    section_heading(ui, "THINGS I'VE BUILT");
    centered(ui, |ui| {
        for project in projects {
            let inner = card(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(&project.title)
                            .size(18.0)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    );
                    chip(ui, &project.category);
                });
                ui.add_space(6.0);
                ui.label(
                    RichText::new(&project.description)
                        .size(13.0)
                        .color(theme::TEXT_MUTED),
                );
                ui.add_space(10.0);
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);
                    for tech in &project.technologies {
                        chip(ui, tech);
                    }
                });
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if let Some(url) = &project.github_url {
                        link_button(ui, "GitHub ↗", url);
                    }
                    if let Some(url) = &project.live_url {
                        link_button(ui, "Live ↗", url);
                    }
                });
            });
            if inner.response.hovered() {
                ui.painter().rect_stroke(
                    inner.response.rect,
                    CornerRadius::same(12),
                    Stroke::new(1.0, theme::lighten(theme::ACCENT, 0.25)),
                    StrokeKind::Outside,
                );
            }
            ui.add_space(26.0);
        }
    });
    ui.add_space(SECTION_PADDING);
}

pub fn contact(ui: &mut egui::Ui, methods: &[ContactMethod]) {
    section_heading(ui, "GET IN TOUCH");
    centered(ui, |ui| {
        for method in methods {
            card(ui, |ui| {
                ui.label(
                    RichText::new(&method.title)
                        .size(16.0)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                );
                match &method.link {
                    Some(link) => {
                        if ui
                            .link(RichText::new(&method.value).color(theme::ACCENT))
                            .clicked()
                        {
                            ui.ctx().open_url(egui::OpenUrl::new_tab(link));
                        }
                    }
                    None => {
                        ui.label(RichText::new(&method.value).color(theme::ACCENT));
                    }
                }
                ui.label(
                    RichText::new(&method.description)
                        .size(12.0)
                        .color(theme::TEXT_MUTED),
                );
            });
            ui.add_space(16.0);
        }
        ui.add_space(40.0);
        ui.label(
            RichText::new("Built with care. Thanks for scrolling all the way down.")
                .size(12.0)
                .color(theme::TEXT_MUTED),
        );
    });
    ui.add_space(SECTION_PADDING);
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::toggle_courses;

    #[test]
    fn course_toggle_flips_per_entry() {
        let mut expanded = HashSet::new();

        toggle_courses(&mut expanded, 1);
        assert!(expanded.contains(&1));

        // Another entry toggles independently.
        toggle_courses(&mut expanded, 0);
        assert!(expanded.contains(&0) && expanded.contains(&1));

        // A second click on the same entry collapses it again.
        toggle_courses(&mut expanded, 1);
        assert!(!expanded.contains(&1));
        assert!(expanded.contains(&0));
    }
}
