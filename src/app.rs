//! Main application state and egui integration.
//!
//! Owns the session and the per-screen state, and routes navigation between
//! screens. The onboarding wizard is shown whenever no profile is active.

use eframe::egui;

use chrono::{Local, Utc};
use fittrack::programs::ProgramCatalog;
use fittrack::session::FitnessSession;
use fittrack::t;
use fittrack::ui::screens::{
    HomeScreen, LogWorkoutScreen, OnboardingAction, OnboardingScreen, ProfileAction,
    ProfileScreen, ProgramsScreen, Screen, StatsScreen, WeekSummaryScreen,
};
use fittrack::ui::theme::Theme;
use fittrack::workouts::ExerciseLibrary;

/// Main application state.
pub struct FitTrackApp {
    /// Current screen
    current_screen: Screen,
    /// UI theme
    theme: Theme,
    /// Active profile and its data
    session: FitnessSession,
    /// Built-in and custom exercises
    library: ExerciseLibrary,
    /// Built-in training programs
    catalog: ProgramCatalog,
    /// Last error shown in the status bar
    status: Option<String>,
    home_screen: HomeScreen,
    onboarding_screen: OnboardingScreen,
    log_workout_screen: LogWorkoutScreen,
    programs_screen: ProgramsScreen,
    stats_screen: StatsScreen,
    profile_screen: ProfileScreen,
}

impl FitTrackApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>, mut session: FitnessSession) -> Self {
        let theme = Theme::from_preference(session.theme());
        cc.egui_ctx.set_visuals(theme.visuals());

        let mut status = None;
        if session.profile().is_some() {
            if let Err(e) = session.refresh_stats(Local::now().date_naive()) {
                tracing::error!("Failed to refresh weekly stats: {}", e);
                status = Some(e.to_string());
            }
        }

        let mut app = Self {
            current_screen: Screen::Home,
            theme,
            onboarding_screen: OnboardingScreen::new(session.language()),
            session,
            library: ExerciseLibrary::default(),
            catalog: ProgramCatalog::default(),
            status,
            home_screen: HomeScreen::new(),
            log_workout_screen: LogWorkoutScreen::new(),
            programs_screen: ProgramsScreen::new(),
            stats_screen: StatsScreen::new(),
            profile_screen: ProfileScreen::new(),
        };

        if app.session.needs_onboarding() {
            app.start_onboarding();
        }
        app
    }

    fn navigate(&mut self, screen: Screen) {
        tracing::debug!("Navigating from {:?} to {:?}", self.current_screen, screen);
        match screen {
            Screen::Onboarding => self.start_onboarding(),
            Screen::LogWorkout => self.log_workout_screen.reset(),
            Screen::Profile => self.profile_screen.refresh(&self.session),
            _ => {}
        }
        self.current_screen = screen;
    }

    /// Reset the wizard with the current list of saved profiles.
    fn start_onboarding(&mut self) {
        let backups = match self.session.backups() {
            Ok(backups) => backups,
            Err(e) => {
                tracing::error!("Failed to list backups: {}", e);
                Vec::new()
            }
        };
        self.onboarding_screen.reset(self.session.language(), backups);
        self.current_screen = Screen::Onboarding;
    }

    /// Resolve the stored theme preference and apply it.
    fn apply_theme(&mut self, ctx: &egui::Context) {
        self.theme = Theme::from_preference(self.session.theme());
        ctx.set_visuals(self.theme.visuals());
    }

    /// Toggle the theme between dark and light.
    fn toggle_theme(&mut self, ctx: &egui::Context) {
        let next = match self.theme {
            Theme::Dark => fittrack::storage::ThemePreference::Light,
            Theme::Light => fittrack::storage::ThemePreference::Dark,
        };
        if let Err(e) = self.session.set_theme(next) {
            tracing::error!("Failed to save theme: {}", e);
            self.status = Some(e.to_string());
        }
        self.apply_theme(ctx);
    }

    fn handle_onboarding(&mut self, action: OnboardingAction, ctx: &egui::Context) {
        let result = match action {
            OnboardingAction::None => return,
            OnboardingAction::Completed(completed) => {
                self.session.complete_onboarding(*completed, Utc::now())
            }
            OnboardingAction::SwitchTo(id) => self.session.switch_user(&id, Utc::now()),
        };

        match result {
            Ok(()) => {
                self.status = None;
                self.apply_theme(ctx);
                self.navigate(Screen::Home);
            }
            Err(e) => {
                tracing::error!("Failed to activate profile: {}", e);
                self.status = Some(e.to_string());
            }
        }
    }

    fn handle_profile(&mut self, action: ProfileAction, ctx: &egui::Context) {
        match action {
            ProfileAction::None => {}
            ProfileAction::ThemeChanged(_) => self.apply_theme(ctx),
            ProfileAction::LoggedOut => self.navigate(Screen::Onboarding),
            ProfileAction::Switched => {
                self.log_workout_screen.reset();
                self.apply_theme(ctx);
            }
        }
    }
}

impl eframe::App for FitTrackApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let onboarding = self.session.needs_onboarding();
        if onboarding && self.current_screen != Screen::Onboarding {
            self.start_onboarding();
        }

        // Handle keyboard shortcuts
        if !onboarding
            && ctx.input(|i| i.key_pressed(egui::Key::Escape))
            && self.current_screen != Screen::Home
        {
            self.navigate(Screen::Home);
        }

        // Top panel with navigation
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("FitTrack");
                ui.separator();

                if !onboarding {
                    for screen in Screen::navigation() {
                        if ui
                            .selectable_label(self.current_screen == *screen, screen.nav_label())
                            .clicked()
                        {
                            self.navigate(*screen);
                        }
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    // Theme toggle
                    let theme_icon = match self.theme {
                        Theme::Dark => "🌙",
                        Theme::Light => "☀",
                    };
                    if ui.button(theme_icon).on_hover_text(t!("profile-theme")).clicked() {
                        self.toggle_theme(ctx);
                    }

                    if let Some(profile) = self.session.profile() {
                        ui.label(format!("{} {}", profile.avatar_label(), profile.name));
                    }
                });
            });
        });

        // Status bar at bottom
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
                if let Some(status) = &self.status {
                    ui.separator();
                    ui.colored_label(self.theme.palette().error, status);
                }
            });
        });

        let palette = self.theme.palette();

        // Main content area
        egui::CentralPanel::default().show(ctx, |ui| {
            let next = match self.current_screen {
                Screen::Onboarding => {
                    let action = self.onboarding_screen.show(ui);
                    self.handle_onboarding(action, ctx);
                    None
                }
                Screen::Home => {
                    self.home_screen
                        .show(ui, &self.session, &self.catalog, &palette)
                }
                Screen::LogWorkout => self.log_workout_screen.show(
                    ui,
                    &mut self.session,
                    &mut self.library,
                    &self.catalog,
                    &palette,
                ),
                Screen::Programs => {
                    self.programs_screen
                        .show(ui, &mut self.session, &self.catalog, &palette)
                }
                Screen::Stats => self.stats_screen.show(ui, &self.session, &palette),
                Screen::WeekSummary => WeekSummaryScreen::show(ui, &self.session, &palette),
                Screen::Profile => {
                    let action = self.profile_screen.show(ui, &mut self.session, &palette);
                    self.handle_profile(action, ctx);
                    None
                }
            };

            if let Some(next) = next {
                self.navigate(next);
            }
        });
    }
}
