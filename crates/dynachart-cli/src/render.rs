//! Text rendering of a bar chart

use dynachart::Chart;

/// Format a value the way the chart labels show it
pub(crate) fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

/// Render the primary series as horizontal bars, in display order
///
/// The longest bar is `width` characters. Negative values draw no bar.
pub(crate) fn render_chart(chart: &Chart, width: usize) -> String {
    let mut out = String::new();
    out.push_str(&chart.title.text);
    out.push('\n');

    let Some(series) = chart.primary_series() else {
        return out;
    };

    let max = series.values().iter().copied().fold(0.0_f64, f64::max);
    let name_width = series
        .categories()
        .iter()
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(0);

    for ((category, &value), fill) in series
        .categories()
        .iter()
        .zip(series.values())
        .zip(series.fills())
    {
        let len = if max > 0.0 && value > 0.0 {
            ((value / max) * width as f64).round() as usize
        } else {
            0
        };
        let color = fill.map(|c| c.to_string()).unwrap_or_default();

        out.push_str(&format!(
            "{:<name_width$} |{}",
            category,
            "#".repeat(len),
            name_width = name_width
        ));
        if series.has_data_labels {
            out.push_str(&format!(" {}", format_value(value)));
        }
        if !color.is_empty() {
            out.push_str(&format!(" ({})", color));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use dynachart::Color;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(42.0), "42");
        assert_eq!(format_value(-3.0), "-3");
        assert_eq!(format_value(1.0 / 3.0), "0.33");
    }

    #[test]
    fn test_render_bars() {
        let mut chart = Chart::animated_bar("c", vec!["Spain".into(), "Iran".into()])
            .with_title("3/15");
        let series = chart.primary_series_mut().unwrap();
        series.set_value(0, 5.0);
        series.set_value(1, 10.0);
        series.set_point_fill(1, Color::RED);

        assert_eq!(
            render_chart(&chart, 10),
            "3/15\nSpain |##### 5\nIran  |########## 10 (#FF0000)\n"
        );
    }

    #[test]
    fn test_render_all_zero() {
        let chart = Chart::animated_bar("c", vec!["A".into()]);
        assert_eq!(render_chart(&chart, 10), "\nA | 0\n");
    }
}
