//! Results Panel (Right Side)
//!
//! Shows one of:
//! - Error message from the last calculation attempt
//! - Design summary (moment, shear, required modulus) with diagrams
//! - A prompt when nothing has been calculated yet

use iced::widget::{column, container, scrollable, text, Canvas, Column, Space};
use iced::{Element, Length};

use beam_core::calculations::beam::{BeamInput, BeamResult};
use beam_core::materials::STEEL_E_MPA;

use super::shared::diagrams::{BeamDiagram, BeamDiagramData};
use crate::{App, Message};

/// Render the results panel based on the current calculation state
pub fn view_results_panel(app: &App) -> Element<'_, Message> {
    let content: Column<'_, Message> = if let Some(ref error) = app.error_message {
        // Show error message
        column![
            text("Error").size(14),
            Space::new().height(8),
            text(error).size(12).color([0.8, 0.2, 0.2]),
        ]
    } else if let (Some(ref input), Some(ref result)) = (&app.calc_input, &app.result) {
        view_design_summary(input, result)
    } else {
        column![text("Enter beam parameters and press Calculate Design")
            .size(12)
            .color([0.5, 0.5, 0.5])]
    };

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(65))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

/// Render the design summary with the moment diagram canvas
fn view_design_summary<'a>(input: &'a BeamInput, result: &'a BeamResult) -> Column<'a, Message> {
    let diagram_data = BeamDiagramData::from_calc(input, result);
    let diagram = BeamDiagram::new(diagram_data);

    let canvas_widget: Element<'_, Message> = Canvas::new(diagram)
        .width(Length::Fill)
        .height(Length::Fixed(300.0))
        .into();

    column![
        text("Design Summary").size(14),
        Space::new().height(8),
        text(format!(
            "Maximum Bending Moment: {:.2} kNm",
            result.max_moment_knm()
        ))
        .size(11),
        text(format!("Maximum Shear Force: {:.2} kN", result.max_shear_kn())).size(11),
        text(format!(
            "Required Section Modulus: {:.2} mm³",
            result.required_modulus_mm3
        ))
        .size(11),
        Space::new().height(12),
        text("Material").size(12),
        text(format!(
            "Grade: {} (Fy = {:.0} MPa)",
            input.grade.display_name(),
            result.yield_strength_mpa
        ))
        .size(11),
        text(format!(
            "E = {:.0} MPa, φ = {:.2}",
            STEEL_E_MPA, result.resistance_factor
        ))
        .size(11),
        Space::new().height(8),
        text("Compare with standard W-sections from the AISC Manual.")
            .size(10)
            .color([0.5, 0.5, 0.5]),
        Space::new().height(15),
        text("Diagrams").size(14),
        Space::new().height(8),
        canvas_widget,
    ]
}
