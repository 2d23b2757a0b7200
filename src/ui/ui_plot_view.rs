use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Bar, BarChart, GridInput, GridMark, Legend, Line, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::config::PLOT_CONFIG;
use crate::domain::ChartDatum;
use crate::domain::chart_datum::day_type_counts;
use crate::ui::config::UI_TEXT;
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::card;

/// One wedge of the day-type pie, angles in radians measured counter-clockwise
/// from the positive x axis.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: &'static str,
    pub count: usize,
    pub fraction: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: Color32,
}

impl PieSlice {
    /// "Weekday: 80%"
    pub fn caption(&self) -> String {
        format!("{}: {:.0}%", self.label, self.fraction * 100.0)
    }

    /// Point halfway along the wedge at `radius`, used to place the caption.
    pub fn label_anchor(&self, radius: f64) -> [f64; 2] {
        let mid = (self.start_angle + self.end_angle) / 2.0;
        [radius * mid.cos(), radius * mid.sin()]
    }
}

/// Splits a unit circle between weekday and weekend records, starting at
/// twelve o'clock and going clockwise. Empty categories get no slice.
pub fn pie_slices(weekday: usize, weekend: usize) -> Vec<PieSlice> {
    let total = weekday + weekend;
    if total == 0 {
        return Vec::new();
    }

    let mut slices = Vec::new();
    let mut angle = FRAC_PI_2;
    for (label, count, color) in [
        ("Weekday", weekday, PLOT_CONFIG.weekday_color),
        ("Weekend", weekend, PLOT_CONFIG.weekend_color),
    ] {
        if count == 0 {
            continue;
        }
        let fraction = count as f64 / total as f64;
        let sweep = fraction * TAU;
        slices.push(PieSlice {
            label,
            count,
            fraction,
            start_angle: angle,
            end_angle: angle - sweep,
            color,
        });
        angle -= sweep;
    }
    slices
}

/// Closed polygon outline for a wedge: centre, arc points, back to centre.
pub fn wedge_points(start_angle: f64, end_angle: f64, radius: f64, circle_segments: usize) -> Vec<[f64; 2]> {
    let sweep = end_angle - start_angle;
    let steps = ((sweep.abs() / TAU) * circle_segments as f64).ceil().max(1.0) as usize;

    let mut points = Vec::with_capacity(steps + 2);
    points.push([0.0, 0.0]);
    for i in 0..=steps {
        let angle = start_angle + sweep * (i as f64 / steps as f64);
        points.push([radius * angle.cos(), radius * angle.sin()]);
    }
    points
}

/// One grid mark per record so the x axis can show record labels.
fn index_grid_spacer(len: usize) -> impl Fn(GridInput) -> Vec<GridMark> {
    move |input: GridInput| {
        let (min, max) = input.bounds;
        (0..len)
            .map(|i| i as f64)
            .filter(|value| *value >= min && *value <= max)
            .map(|value| GridMark {
                value,
                step_size: 1.0,
            })
            .collect()
    }
}

/// Label for an x grid mark that falls on a record index.
fn label_at(labels: &[String], value: f64) -> String {
    if value < 0.0 || value.fract().abs() > f64::EPSILON {
        return String::new();
    }
    labels.get(value as usize).cloned().unwrap_or_default()
}

fn series(data: &[ChartDatum], pick: impl Fn(&ChartDatum) -> f64) -> Vec<[f64; 2]> {
    data.iter()
        .enumerate()
        .map(|(i, datum)| [i as f64, pick(datum)])
        .collect()
}

/// "Sales & Gas Trends": one line per measure.
pub fn show_trend_chart(ui: &mut Ui, data: &[ChartDatum]) {
    card(ui, |ui| {
        ui.label_header(UI_TEXT.trend_chart_heading);
        if data.is_empty() {
            ui.spinner();
            ui.label_subdued(UI_TEXT.chart_loading);
            return;
        }

        let labels: Vec<String> = data.iter().map(|d| d.label.clone()).collect();
        let trends = [
            (UI_TEXT.series_total_sales, series(data, |d| d.total_sales), PLOT_CONFIG.total_sales_color),
            (UI_TEXT.series_gas_sold, series(data, |d| d.gas_sold), PLOT_CONFIG.gas_sold_color),
            (UI_TEXT.series_lotto_sales, series(data, |d| d.lotto_sales), PLOT_CONFIG.lotto_sales_color),
        ];

        Plot::new("trend_chart")
            .height(PLOT_CONFIG.trend_chart_height)
            .legend(Legend::default())
            .include_y(0.0)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .x_grid_spacer(index_grid_spacer(labels.len()))
            .x_axis_formatter(move |mark, _range| label_at(&labels, mark.value))
            .show(ui, |plot_ui| {
                for (name, points, color) in trends {
                    plot_ui.line(
                        Line::new(name, PlotPoints::from(points.clone()))
                            .color(color)
                            .width(PLOT_CONFIG.line_width),
                    );
                    plot_ui.points(Points::new(name, PlotPoints::from(points)).color(color).radius(3.0));
                }
            });
    });
}

/// "Sales Distribution": total sales of the first few records.
pub fn show_bar_chart(ui: &mut Ui, data: &[ChartDatum]) {
    card(ui, |ui| {
        ui.label_header(UI_TEXT.bar_chart_heading);
        let records = &data[..data.len().min(PLOT_CONFIG.bar_chart_records)];
        let labels: Vec<String> = records.iter().map(|d| d.label.clone()).collect();

        let bars: Vec<Bar> = records
            .iter()
            .enumerate()
            .map(|(i, datum)| {
                Bar::new(i as f64, datum.total_sales)
                    .width(PLOT_CONFIG.bar_width)
                    .name(&datum.label)
            })
            .collect();

        Plot::new("bar_chart")
            .height(PLOT_CONFIG.small_chart_height)
            .include_y(0.0)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .x_grid_spacer(index_grid_spacer(labels.len()))
            .x_axis_formatter(move |mark, _range| label_at(&labels, mark.value))
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(
                    BarChart::new(UI_TEXT.series_total_sales, bars).color(PLOT_CONFIG.bar_color),
                );
            });
    });
}

/// "Day Type Distribution": share of weekday vs weekend records.
pub fn show_pie_chart(ui: &mut Ui, data: &[ChartDatum]) {
    card(ui, |ui| {
        ui.label_header(UI_TEXT.pie_chart_heading);
        let (weekday, weekend) = day_type_counts(data);
        let slices = pie_slices(weekday, weekend);

        Plot::new("pie_chart")
            .height(PLOT_CONFIG.small_chart_height)
            .legend(Legend::default())
            .data_aspect(1.0)
            .show_axes(false)
            .show_grid(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .include_x(-1.4)
            .include_x(1.4)
            .include_y(-1.2)
            .include_y(1.2)
            .show(ui, |plot_ui| {
                for slice in &slices {
                    let outline = wedge_points(
                        slice.start_angle,
                        slice.end_angle,
                        1.0,
                        PLOT_CONFIG.pie_segments,
                    );
                    plot_ui.polygon(
                        Polygon::new(slice.label, PlotPoints::from(outline))
                            .fill_color(slice.color)
                            .stroke(Stroke::new(1.0, Color32::BLACK)),
                    );

                    let [x, y] = slice.label_anchor(0.6);
                    plot_ui.text(Text::new(
                        slice.label,
                        PlotPoint::new(x, y),
                        RichText::new(slice.caption()).color(Color32::WHITE).strong(),
                    ));
                }
            });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn pie_slices_cover_the_full_circle() {
        let slices = pie_slices(4, 1);
        assert_eq!(slices.len(), 2);
        assert!(approx_eq(slices[0].fraction, 0.8));
        assert!(approx_eq(slices[1].fraction, 0.2));
        assert_eq!(slices[0].caption(), "Weekday: 80%");

        let swept: f64 = slices.iter().map(|s| (s.start_angle - s.end_angle).abs()).sum();
        assert!(approx_eq(swept, TAU));
        // Contiguous wedges
        assert!(approx_eq(slices[0].end_angle, slices[1].start_angle));
    }

    #[test]
    fn empty_categories_produce_no_slice() {
        assert!(pie_slices(0, 0).is_empty());
        let only_weekend = pie_slices(0, 3);
        assert_eq!(only_weekend.len(), 1);
        assert_eq!(only_weekend[0].label, "Weekend");
        assert!(approx_eq(only_weekend[0].fraction, 1.0));
    }

    #[test]
    fn wedge_starts_and_ends_on_the_arc() {
        let points = wedge_points(FRAC_PI_2, 0.0, 1.0, 96);
        assert_eq!(points[0], [0.0, 0.0]);
        let first_arc = points[1];
        let last_arc = points[points.len() - 1];
        assert!(first_arc[0].abs() < 1e-12);
        assert!(approx_eq(first_arc[1], 1.0));
        assert!(approx_eq(last_arc[0], 1.0));
        assert!(last_arc[1].abs() < 1e-12);
        // A quarter circle at 96 segments per turn
        assert_eq!(points.len(), 24 + 2);
    }

    #[test]
    fn axis_labels_only_on_record_indices() {
        let labels = vec!["Day 1".to_string(), "Day 2".to_string()];
        assert_eq!(label_at(&labels, 1.0), "Day 2");
        assert_eq!(label_at(&labels, 0.5), "");
        assert_eq!(label_at(&labels, 5.0), "");
        assert_eq!(label_at(&labels, -1.0), "");
    }
}
