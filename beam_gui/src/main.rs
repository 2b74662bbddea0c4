//! # SteelSpan GUI Application
//!
//! Graphical interface for simply supported steel beam design.
//! Built with the Iced framework for cross-platform support.
//!
//! Layout: header with theme toggle, input sidebar (span, load, grade),
//! results panel (design summary plus the bending-moment diagram canvas),
//! and a status bar.

mod ui;

use beam_core::calculations::beam::{calculate, BeamInput, BeamResult};
use beam_core::errors::{CalcError, CalcResult};
use beam_core::loads::{BeamLoad, LoadKind};
use beam_core::materials::SteelGrade;

use iced::widget::{column, row};
use iced::{Element, Length, Theme};

fn main() -> iced::Result {
    iced::application(App::default, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .run()
}

/// Application state
pub struct App {
    // Input fields are kept as raw strings so partial edits stay visible;
    // parsing happens on Calculate.
    pub beam_label: String,
    pub span_m: String,
    pub load_magnitude: String,
    pub selected_load_kind: LoadKind,
    pub selected_grade: SteelGrade,

    // Last calculation (recomputed from scratch on every Calculate)
    pub calc_input: Option<BeamInput>,
    pub result: Option<BeamResult>,
    pub error_message: Option<String>,

    // UI state
    pub status: String,
    pub dark_mode: bool,
}

impl Default for App {
    fn default() -> Self {
        App {
            beam_label: "B-1".to_string(),
            span_m: "4.0".to_string(),
            load_magnitude: "10.0".to_string(),
            selected_load_kind: LoadKind::Udl,
            selected_grade: SteelGrade::A36,
            calc_input: None,
            result: None,
            error_message: None,
            status: "Ready".to_string(),
            dark_mode: false,
        }
    }
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    BeamLabelChanged(String),
    SpanChanged(String),
    LoadMagnitudeChanged(String),
    LoadKindSelected(LoadKind),
    GradeSelected(SteelGrade),
    Calculate,
    ToggleDarkMode,
}

impl App {
    fn title(&self) -> String {
        "SteelSpan - Steel Beam Design".to_string()
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::BeamLabelChanged(value) => self.beam_label = value,
            Message::SpanChanged(value) => self.span_m = value,
            Message::LoadMagnitudeChanged(value) => self.load_magnitude = value,
            Message::LoadKindSelected(kind) => self.selected_load_kind = kind,
            Message::GradeSelected(grade) => self.selected_grade = grade,
            Message::ToggleDarkMode => self.dark_mode = !self.dark_mode,
            Message::Calculate => self.run_calculation(),
        }
    }

    /// Parse the raw input fields into a `BeamInput`
    fn parse_input(&self) -> CalcResult<BeamInput> {
        let span_m: f64 = self.span_m.trim().parse().map_err(|_| {
            CalcError::invalid_input("span_m", self.span_m.clone(), "Span must be a number")
        })?;

        let magnitude: f64 = self.load_magnitude.trim().parse().map_err(|_| {
            CalcError::invalid_input(
                "load",
                self.load_magnitude.clone(),
                "Load magnitude must be a number",
            )
        })?;

        let load = match self.selected_load_kind {
            LoadKind::Udl => BeamLoad::udl(magnitude),
            LoadKind::PointLoad => BeamLoad::point(magnitude),
        };

        Ok(BeamInput {
            label: self.beam_label.clone(),
            span_m,
            load,
            grade: self.selected_grade,
        })
    }

    /// Run the calculation synchronously and store the outcome
    fn run_calculation(&mut self) {
        match self.parse_input().and_then(|input| {
            let result = calculate(&input)?;
            Ok((input, result))
        }) {
            Ok((input, result)) => {
                self.status = format!(
                    "{}: M_max = {:.2} kNm, S_req = {:.2} mm³",
                    input.label,
                    result.max_moment_knm(),
                    result.required_modulus_mm3
                );
                self.calc_input = Some(input);
                self.result = Some(result);
                self.error_message = None;
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
                self.calc_input = None;
                self.result = None;
                self.status = "Calculation failed".to_string();
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let panels = row![
            ui::input_panel::view_input_panel(self),
            ui::results_panel::view_results_panel(self),
        ]
        .spacing(8)
        .height(Length::Fill);

        column![
            ui::toolbar::view_header(self.dark_mode),
            panels,
            ui::status_bar::view_status_bar(&self.status),
        ]
        .spacing(8)
        .padding(10)
        .into()
    }
}
