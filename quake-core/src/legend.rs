use crate::{constants::LEGEND_SWATCH_SIZE, encoding::DepthBand};

use serde::Serialize;

/// A legend entry covering the depth range of one band.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendRow {
    pub color: &'static str,
    pub lower_km: f64,
    /// `None` for the deepest band, which has no upper bound.
    pub upper_km: Option<f64>,
}

impl LegendRow {
    pub fn label(&self) -> String {
        match self.upper_km {
            Some(upper) => format!("{}\u{2013}{}", self.lower_km, upper),
            None => format!("{}+", self.lower_km),
        }
    }
}

/// One row per band, in table order, each closed by the next band's lower bound.
pub fn legend_rows(bands: &[DepthBand]) -> Vec<LegendRow> {
    bands
        .iter()
        .enumerate()
        .map(|(i, band)| LegendRow {
            color: band.color,
            lower_km: band.lower_km,
            upper_km: bands.get(i + 1).map(|next| next.lower_km),
        })
        .collect()
}

/// Inner markup of the legend control: a colored square followed by the range label.
pub fn legend_html(rows: &[LegendRow]) -> String {
    let mut html = String::from(r#"<div class="info legend">"#);

    for row in rows {
        html.push_str(&format!(
            r#"<i style="background:{}; width: {size}px; height: {size}px; display: inline-block; margin-right: 8px;"></i>{}<br>"#,
            row.color,
            row.label(),
            size = LEGEND_SWATCH_SIZE,
        ));
    }

    html.push_str("</div>");
    html
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::encoding::DEPTH_BANDS;

    #[test]
    fn test_legend_rows_cover_every_band() {
        let rows = legend_rows(&DEPTH_BANDS);

        assert_eq!(rows.len(), 6);

        let labels: Vec<_> = rows.iter().map(LegendRow::label).collect();
        assert_eq!(
            labels,
            vec!["-10–10", "10–30", "30–50", "50–70", "70–90", "90+"]
        );

        for (row, band) in rows.iter().zip(DEPTH_BANDS.iter()) {
            assert_eq!(row.color, band.color);
            assert_eq!(row.lower_km, band.lower_km);
        }
    }

    #[test]
    fn test_only_last_row_is_open_ended() {
        let rows = legend_rows(&DEPTH_BANDS);
        let (last, rest) = rows.split_last().unwrap();

        assert_eq!(last.upper_km, None);
        assert!(last.label().ends_with('+'));
        assert!(rest.iter().all(|row| row.upper_km.is_some()));
    }

    #[test]
    fn test_legend_row_with_zero_upper_bound() {
        let bands = [DepthBand::new(-5.0, "blue"), DepthBand::new(0.0, "red")];
        let rows = legend_rows(&bands);

        assert_eq!(rows[0].label(), "-5–0");
        assert_eq!(rows[1].label(), "0+");
    }

    #[test]
    fn test_legend_html() {
        let html = legend_html(&legend_rows(&DEPTH_BANDS));

        assert!(html.starts_with(r#"<div class="info legend">"#));
        assert!(html.ends_with("</div>"));
        assert_eq!(html.matches("<i style=").count(), 6);
        assert_eq!(html.matches("<br>").count(), 6);
        assert!(html.contains("background:#d73027"));
        assert!(html.contains("90+<br>"));
    }
}
