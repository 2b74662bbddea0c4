//! Canvas drawing utilities for beam diagrams
//!
//! Renders the simply supported beam schematic with supports, load arrows,
//! and reactions, plus the bending-moment diagram.

use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Point, Rectangle, Renderer, Theme};

use beam_core::calculations::beam::{BeamInput, BeamResult};
use beam_core::loads::BeamLoad;

use crate::Message;

/// Data needed to draw beam diagrams
pub struct BeamDiagramData {
    pub span_m: f64,
    pub load: BeamLoad,
    pub max_moment_nm: f64,
    /// Support reaction (N); equal at both ends for the supported load patterns
    pub reaction_n: f64,
    /// Pre-computed diagram points from the calculation
    pub moment_diagram: Vec<(f64, f64)>,
}

impl BeamDiagramData {
    pub fn from_calc(input: &BeamInput, result: &BeamResult) -> Self {
        Self {
            span_m: input.span_m,
            load: input.load,
            max_moment_nm: result.max_moment_nm,
            reaction_n: input.load.reaction_n(input.span_m),
            moment_diagram: result.moment_diagram.clone(),
        }
    }
}

/// Canvas program for drawing beam diagrams
pub struct BeamDiagram {
    data: BeamDiagramData,
}

impl BeamDiagram {
    pub fn new(data: BeamDiagramData) -> Self {
        Self { data }
    }

    fn draw_beam_schematic(
        &self,
        frame: &mut Frame,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    ) {
        let beam_y = y + height * 0.55;
        let beam_thickness = 4.0;
        let support_size = 10.0;
        let reaction_color = Color::from_rgb(0.7, 0.2, 0.2);

        // Draw beam line
        let beam = Path::line(Point::new(x, beam_y), Point::new(x + width, beam_y));
        frame.stroke(
            &beam,
            Stroke::default().with_color(color).with_width(beam_thickness),
        );

        // Pin at the left support, roller at the right
        self.draw_pinned_support(frame, x, beam_y + beam_thickness / 2.0, support_size, color);
        self.draw_roller_support(
            frame,
            x + width,
            beam_y + beam_thickness / 2.0,
            support_size,
            color,
        );

        // Reaction arrows and labels at both supports
        let reaction_kn = self.data.reaction_n / 1000.0;
        if reaction_kn.abs() > 1e-6 {
            for (i, support_x) in [x, x + width].iter().enumerate() {
                let arrow_length = height * 0.15;
                let start_y = beam_y + support_size + 8.0;

                let arrow = Path::line(
                    Point::new(*support_x, start_y + arrow_length),
                    Point::new(*support_x, start_y),
                );
                frame.stroke(
                    &arrow,
                    Stroke::default().with_color(reaction_color).with_width(2.0),
                );

                // Arrow head (pointing up into the beam)
                let head = Path::new(|builder| {
                    builder.move_to(Point::new(*support_x, start_y));
                    builder.line_to(Point::new(*support_x - 3.0, start_y + 6.0));
                    builder.move_to(Point::new(*support_x, start_y));
                    builder.line_to(Point::new(*support_x + 3.0, start_y + 6.0));
                });
                frame.stroke(
                    &head,
                    Stroke::default().with_color(reaction_color).with_width(2.0),
                );

                let label = format!("R_{} = {:.1} kN", i + 1, reaction_kn);
                let label_x = if i == 0 { *support_x + 3.0 } else { *support_x - 60.0 };
                let reaction_text = Text {
                    content: label,
                    position: Point::new(label_x, start_y + arrow_length + 2.0),
                    color: reaction_color,
                    size: iced::Pixels(8.0),
                    ..Text::default()
                };
                frame.fill_text(reaction_text);
            }
        }

        // Load arrows and label
        match self.data.load {
            BeamLoad::Udl { magnitude_kn_per_m } => {
                let num_arrows = 8.min((self.data.span_m * 2.0) as i32).max(4);
                let arrow_spacing = width / (num_arrows as f32);
                let arrow_length = height * 0.2;

                for i in 0..=num_arrows {
                    let ax = x + i as f32 * arrow_spacing;
                    let arrow = Path::line(
                        Point::new(ax, beam_y - arrow_length),
                        Point::new(ax, beam_y - 5.0),
                    );
                    frame.stroke(&arrow, Stroke::default().with_color(color).with_width(1.0));

                    // Arrow head
                    let head = Path::new(|builder| {
                        builder.move_to(Point::new(ax, beam_y - 5.0));
                        builder.line_to(Point::new(ax - 2.0, beam_y - 9.0));
                        builder.move_to(Point::new(ax, beam_y - 5.0));
                        builder.line_to(Point::new(ax + 2.0, beam_y - 9.0));
                    });
                    frame.stroke(&head, Stroke::default().with_color(color).with_width(1.0));
                }

                let load_text = Text {
                    content: format!("w = {:.1} kN/m", magnitude_kn_per_m),
                    position: Point::new(x + width / 2.0, y + 5.0),
                    color,
                    size: iced::Pixels(9.0),
                    align_x: iced::alignment::Horizontal::Center.into(),
                    ..Text::default()
                };
                frame.fill_text(load_text);
            }
            BeamLoad::Point { magnitude_kn } => {
                // Single arrow at midspan
                let ax = x + width / 2.0;
                let arrow_length = height * 0.35;

                let arrow = Path::line(
                    Point::new(ax, beam_y - arrow_length),
                    Point::new(ax, beam_y - 5.0),
                );
                frame.stroke(&arrow, Stroke::default().with_color(color).with_width(2.0));

                let head = Path::new(|builder| {
                    builder.move_to(Point::new(ax, beam_y - 5.0));
                    builder.line_to(Point::new(ax - 4.0, beam_y - 12.0));
                    builder.move_to(Point::new(ax, beam_y - 5.0));
                    builder.line_to(Point::new(ax + 4.0, beam_y - 12.0));
                });
                frame.stroke(&head, Stroke::default().with_color(color).with_width(2.0));

                let load_text = Text {
                    content: format!("P = {:.1} kN", magnitude_kn),
                    position: Point::new(ax + 6.0, beam_y - arrow_length),
                    color,
                    size: iced::Pixels(9.0),
                    ..Text::default()
                };
                frame.fill_text(load_text);
            }
        }

        // Span label
        let span_text = Text {
            content: format!("L = {:.1} m", self.data.span_m),
            position: Point::new(x + width / 2.0, beam_y + support_size + 5.0),
            color,
            size: iced::Pixels(8.0),
            align_x: iced::alignment::Horizontal::Center.into(),
            ..Text::default()
        };
        frame.fill_text(span_text);
    }

    /// Filled triangle
    fn draw_pinned_support(&self, frame: &mut Frame, x: f32, y: f32, size: f32, color: Color) {
        let support = Path::new(|builder| {
            builder.move_to(Point::new(x, y));
            builder.line_to(Point::new(x - size / 2.0, y + size));
            builder.line_to(Point::new(x + size / 2.0, y + size));
            builder.close();
        });
        frame.fill(&support, color);
    }

    /// Triangle with a circle underneath
    fn draw_roller_support(&self, frame: &mut Frame, x: f32, y: f32, size: f32, color: Color) {
        let triangle = Path::new(|builder| {
            builder.move_to(Point::new(x, y));
            builder.line_to(Point::new(x - size / 2.0, y + size * 0.7));
            builder.line_to(Point::new(x + size / 2.0, y + size * 0.7));
            builder.close();
        });
        frame.stroke(&triangle, Stroke::default().with_color(color).with_width(2.0));

        let circle_radius = size * 0.15;
        let circle = Path::circle(
            Point::new(x, y + size * 0.7 + circle_radius + 1.0),
            circle_radius,
        );
        frame.stroke(&circle, Stroke::default().with_color(color).with_width(2.0));
    }

    fn draw_moment_diagram(
        &self,
        frame: &mut Frame,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
        axis_color: Color,
    ) {
        let axis_y = y + height * 0.15;
        let plot_height = height * 0.6;

        // Axis line
        let axis = Path::line(Point::new(x, axis_y), Point::new(x + width, axis_y));
        frame.stroke(&axis, Stroke::default().with_color(axis_color).with_width(1.0));

        // Draw moment diagram using pre-computed points, sagging drawn downward
        if !self.data.moment_diagram.is_empty() && self.data.max_moment_nm.abs() > 1e-6 {
            let max_m = self.data.max_moment_nm;

            // Draw filled area
            let moment_path = Path::new(|builder| {
                builder.move_to(Point::new(x, axis_y));
                for (pos, m) in &self.data.moment_diagram {
                    let px = x + (*pos as f32 / self.data.span_m as f32) * width;
                    let m_ratio = m / max_m;
                    let py = axis_y + (m_ratio as f32) * plot_height;
                    builder.line_to(Point::new(px, py));
                }
                builder.line_to(Point::new(x + width, axis_y));
                builder.close();
            });
            frame.fill(&moment_path, Color { a: 0.3, ..color });

            // Draw outline
            let outline = Path::new(|builder| {
                let first = &self.data.moment_diagram[0];
                let px = x + (first.0 as f32 / self.data.span_m as f32) * width;
                let m_ratio = first.1 / max_m;
                let py = axis_y + (m_ratio as f32) * plot_height;
                builder.move_to(Point::new(px, py));

                for (pos, m) in &self.data.moment_diagram {
                    let px = x + (*pos as f32 / self.data.span_m as f32) * width;
                    let m_ratio = m / max_m;
                    let py = axis_y + (m_ratio as f32) * plot_height;
                    builder.line_to(Point::new(px, py));
                }
            });
            frame.stroke(&outline, Stroke::default().with_color(color).with_width(2.0));
        }

        // Labels
        let title = Text {
            content: "Moment (M)".to_string(),
            position: Point::new(x + 5.0, y + 5.0),
            color,
            size: iced::Pixels(10.0),
            ..Text::default()
        };
        frame.fill_text(title);

        let max_label = Text {
            content: format!("{:.2} kNm", self.data.max_moment_nm / 1000.0),
            position: Point::new(x + width / 2.0, axis_y + plot_height + 10.0),
            color,
            size: iced::Pixels(9.0),
            align_x: iced::alignment::Horizontal::Center.into(),
            ..Text::default()
        };
        frame.fill_text(max_label);
    }
}

impl canvas::Program<Message> for BeamDiagram {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let width = bounds.width;
        let height = bounds.height;

        // Layout: schematic on top, moment diagram below
        let section_height = height / 2.0;
        let margin = 20.0;
        let plot_width = width - 2.0 * margin;

        // Colors
        let beam_color = Color::from_rgb(0.3, 0.3, 0.3);
        let moment_color = Color::from_rgb(0.8, 0.4, 0.2);
        let axis_color = Color::from_rgb(0.5, 0.5, 0.5);

        // Section 1: Beam schematic with load
        self.draw_beam_schematic(&mut frame, margin, 0.0, plot_width, section_height, beam_color);

        // Section 2: Moment diagram
        self.draw_moment_diagram(
            &mut frame,
            margin,
            section_height,
            plot_width,
            section_height,
            moment_color,
            axis_color,
        );

        vec![frame.into_geometry()]
    }
}
