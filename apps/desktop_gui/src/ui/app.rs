use std::{
    collections::{HashMap, HashSet},
    time::{Duration, Instant},
};

use content::domain::{self, Profile, SectionId, NAV_SECTIONS};
use eframe::egui::{self, Align2, CornerRadius, FontId, RichText, Sense};
use view_core::{
    nav_target, Reveal, RevealConfig, RoleRotator, SectionLayout, SectionRect, SectionTracker,
    SmoothScroll, Viewport, FIXED_HEADER_OFFSET, ROLE_ROTATION_PERIOD, SMOOTH_SCROLL_DURATION,
};

use crate::ui::{sections, theme};

/// How long the reveal fade/slide takes once `in_view` flips.
const REVEAL_TRANSITION_SECS: f32 = 0.6;

pub struct PortfolioApp {
    profile: Profile,
    tracker: SectionTracker,
    layout: SectionLayout,
    reveals: HashMap<SectionId, Reveal>,
    rotator: RoleRotator,
    smooth_scroll: Option<SmoothScroll>,
    scroll_offset: f32,
    max_scroll: f32,
    expanded_courses: HashSet<usize>,
    pending_nav: Option<SectionId>,
}

impl PortfolioApp {
    pub fn new(cc: &eframe::CreationContext<'_>, profile: Profile) -> Self {
        theme::apply(&cc.egui_ctx);

        // Reveal configs per block, matching the page design: the about block
        // latches on first view, the rest track the viewport live.
        let mut reveals = HashMap::new();
        reveals.insert(domain::ABOUT, Reveal::new(RevealConfig::once(0.2)));
        reveals.insert(domain::EXPERIENCE, Reveal::new(RevealConfig::live(0.1)));
        reveals.insert(domain::EDUCATION, Reveal::new(RevealConfig::live(0.1)));
        reveals.insert(domain::SKILLS, Reveal::new(RevealConfig::live(0.1)));
        reveals.insert(domain::CONTACT, Reveal::new(RevealConfig::live(0.1)));

        let role_count = profile.hero.roles.len();
        Self {
            tracker: SectionTracker::new(NAV_SECTIONS),
            layout: SectionLayout::new(),
            reveals,
            rotator: RoleRotator::start(role_count, ROLE_ROTATION_PERIOD),
            smooth_scroll: None,
            scroll_offset: 0.0,
            max_scroll: 0.0,
            expanded_courses: HashSet::new(),
            pending_nav: None,
            profile,
        }
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header")
            .exact_height(FIXED_HEADER_OFFSET)
            .frame(
                egui::Frame::new()
                    .fill(theme::HEADER_BG)
                    .inner_margin(egui::Margin::symmetric(24, 0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    logo(ui, &self.profile.hero.name);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        for section in NAV_SECTIONS.iter().rev() {
                            let active = self.tracker.active() == Some(section.id);
                            if nav_button(ui, section.label, active).clicked() {
                                self.pending_nav = Some(section.id);
                            }
                        }
                    });
                });
            });
    }

    /// Starts a smooth scroll toward the requested section. A section that
    /// has not been measured yet is skipped silently.
    fn start_pending_nav(&mut self) {
        let Some(id) = self.pending_nav.take() else {
            return;
        };
        let Some(rect) = self.layout.get(id) else {
            return;
        };

        let viewport_relative_top = rect.top - self.scroll_offset;
        let target =
            nav_target(viewport_relative_top, self.scroll_offset, FIXED_HEADER_OFFSET).max(0.0);
        self.smooth_scroll = Some(SmoothScroll::new(
            self.scroll_offset,
            target,
            SMOOTH_SCROLL_DURATION,
            Instant::now(),
        ));
        tracing::debug!(section = id.as_str(), offset = target, "navigating to section");
    }

    fn show_page(&mut self, ctx: &egui::Context, role_index: usize) {
        self.start_pending_nav();

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::BACKGROUND))
            .show(ctx, |ui| {
                let viewport_height = ui.available_height();

                let mut area = egui::ScrollArea::vertical().id_salt("page");
                if let Some(mut animation) = self.smooth_scroll.take() {
                    // A wheel or scrollbar interaction abandons the animation.
                    if !animation.interrupted_by(self.scroll_offset, self.max_scroll) {
                        let now = Instant::now();
                        area = area.vertical_scroll_offset(animation.sample(now));
                        if !animation.is_finished(now) {
                            self.smooth_scroll = Some(animation);
                        }
                    }
                }

                let output = area.show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    self.page_contents(ui, role_index);
                });
                self.scroll_offset = output.state.offset.y;
                self.max_scroll = (output.content_size.y - viewport_height).max(0.0);

                let viewport = Viewport {
                    scroll_offset: self.scroll_offset,
                    height: viewport_height,
                };
                self.tracker.observe(&self.layout, viewport);
                for (id, reveal) in self.reveals.iter_mut() {
                    // Blocks without a measurement never fire; they stay in
                    // their initial hidden state.
                    if let Some(rect) = self.layout.get(*id) {
                        reveal.observe(rect.intersection_ratio(viewport));
                    }
                }
            });
    }

    fn page_contents(&mut self, ui: &mut egui::Ui, role_index: usize) {
        let origin_y = ui.cursor().min.y;

        let rect = ui
            .scope(|ui| sections::hero(ui, &self.profile.hero, role_index))
            .response
            .rect;
        self.record(domain::HERO, rect, origin_y);

        let t = self.reveal_progress(ui.ctx(), domain::ABOUT);
        let rect = ui
            .scope(|ui| {
                sections::reveal_frame(ui, t, |ui| sections::about(ui, &self.profile.about))
            })
            .response
            .rect;
        self.record(domain::ABOUT, rect, origin_y);

        let t = self.reveal_progress(ui.ctx(), domain::EXPERIENCE);
        let rect = ui
            .scope(|ui| {
                sections::reveal_frame(ui, t, |ui| {
                    sections::experience(ui, &self.profile.experience)
                })
            })
            .response
            .rect;
        self.record(domain::EXPERIENCE, rect, origin_y);

        let t = self.reveal_progress(ui.ctx(), domain::EDUCATION);
        let rect = ui
            .scope(|ui| {
                sections::reveal_frame(ui, t, |ui| {
                    sections::education(ui, &self.profile.education, &mut self.expanded_courses)
                })
            })
            .response
            .rect;
        self.record(domain::EDUCATION, rect, origin_y);

        let t = self.reveal_progress(ui.ctx(), domain::SKILLS);
        let rect = ui
            .scope(|ui| {
                sections::reveal_frame(ui, t, |ui| sections::skills(ui, &self.profile.skills))
            })
            .response
            .rect;
        self.record(domain::SKILLS, rect, origin_y);

        let rect = ui
            .scope(|ui| sections::projects(ui, &self.profile.projects))
            .response
            .rect;
        self.record(domain::PROJECTS, rect, origin_y);

        let t = self.reveal_progress(ui.ctx(), domain::CONTACT);
        let rect = ui
            .scope(|ui| {
                sections::reveal_frame(ui, t, |ui| sections::contact(ui, &self.profile.contact))
            })
            .response
            .rect;
        self.record(domain::CONTACT, rect, origin_y);
    }

    fn record(&mut self, id: SectionId, rect: egui::Rect, origin_y: f32) {
        self.layout.record(
            id,
            SectionRect {
                top: rect.min.y - origin_y,
                height: rect.height(),
            },
        );
    }

    /// Animated progress of a block's reveal transition. Blocks with no
    /// reveal config are always fully shown.
    fn reveal_progress(&self, ctx: &egui::Context, id: SectionId) -> f32 {
        let in_view = self
            .reveals
            .get(&id)
            .map(|reveal| reveal.in_view())
            .unwrap_or(true);
        ctx.animate_bool_with_time(
            egui::Id::new(("reveal", id.as_str())),
            in_view,
            REVEAL_TRANSITION_SECS,
        )
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let role_index = self.rotator.poll();

        self.show_header(ctx);
        self.show_page(ctx, role_index);

        if self.smooth_scroll.is_some() {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            // Idle cadence still picks up rotator ticks promptly.
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.rotator.stop();
    }
}

fn nav_button(ui: &mut egui::Ui, label: &str, active: bool) -> egui::Response {
    let color = if active {
        theme::ACCENT
    } else {
        theme::TEXT_PRIMARY
    };
    let fill = if active {
        theme::accent_soft()
    } else {
        egui::Color32::TRANSPARENT
    };
    ui.add(
        egui::Button::new(RichText::new(label).size(14.0).color(color))
            .fill(fill)
            .corner_radius(CornerRadius::same(8)),
    )
}

fn logo(ui: &mut egui::Ui, name: &str) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(40.0, 40.0), Sense::hover());
    ui.painter()
        .rect_filled(rect, CornerRadius::same(10), theme::ACCENT);
    ui.painter().text(
        rect.center(),
        Align2::CENTER_CENTER,
        logo_monogram(name),
        FontId::proportional(18.0),
        theme::BACKGROUND,
    );
}

fn logo_monogram(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(|c| c.to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::logo_monogram;

    #[test]
    fn monogram_takes_the_first_two_initials() {
        assert_eq!(logo_monogram("Priya Anand"), "pa");
        assert_eq!(logo_monogram("Ada Marie Lovelace"), "am");
    }

    #[test]
    fn monogram_handles_short_and_empty_names() {
        assert_eq!(logo_monogram("Cher"), "c");
        assert_eq!(logo_monogram(""), "");
    }
}
