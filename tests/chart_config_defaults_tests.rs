use ferment_chart::api::{
    ChartConfiguration, DENSITY_AXIS_COLOR, DecimationAlgorithm, TEMPERATURE_AXIS_COLOR,
};
use ferment_chart::core::{AxisPosition, BorderJoinStyle, FontWeight, PointStyle};
use ferment_chart::interaction::InteractionMode;
use serde_json::json;

#[test]
fn default_options_match_renderer_golden_shape() {
    let value = ChartConfiguration::fermenting()
        .to_json_value()
        .expect("options should serialize");

    let expected = json!({
        "responsive": true,
        "pointStyle": false,
        "maintainAspectRatio": false,
        "interaction": {
            "mode": "index",
            "intersect": false
        },
        "plugins": {
            "decimation": {
                "enabled": true,
                "algorithm": "lttb"
            },
            "title": {
                "display": true,
                "text": "Fermenting",
                "font": { "weight": "bold", "size": 16 }
            }
        },
        "scales": {
            "yDensity": {
                "title": {
                    "display": true,
                    "text": "Density (SG 20/20)",
                    "font": { "weight": "bold", "size": 16 },
                    "color": "#27013F"
                },
                "display": true,
                "position": "left",
                "yAxisID": "y-densities",
                "borderJoinStyle": "round",
                "grid": {
                    "drawOnChartArea": true,
                    "drawTicks": true
                }
            },
            "yTemperature": {
                "title": {
                    "display": true,
                    "text": "Temperature (°C)",
                    "font": { "weight": "bold", "size": 16 },
                    "color": "#F27405"
                },
                "display": true,
                "position": "right",
                "yAxisID": "y-temperatures",
                "borderJoinStyle": "round",
                "grid": {
                    "drawOnChartArea": false
                }
            },
            "x": {
                "grid": { "offset": false }
            }
        }
    });

    assert_eq!(value, expected);
}

#[test]
fn default_trait_matches_factory() {
    assert_eq!(ChartConfiguration::default(), ChartConfiguration::fermenting());
}

#[test]
fn scenario_title_positions_and_time_grid() {
    let config = ChartConfiguration::fermenting();

    assert_eq!(config.plugins.title.text, "Fermenting");
    assert!(config.plugins.title.display);
    assert_eq!(config.plugins.title.font.weight, FontWeight::Bold);
    assert_eq!(config.plugins.title.font.size, 16);
    assert_eq!(config.scales.y_density.position, AxisPosition::Left);
    assert_eq!(config.scales.y_temperature.position, AxisPosition::Right);
    assert_eq!(config.scales.x.grid.offset, Some(false));
    assert_eq!(config.scales.x.scale_type, None);
}

#[test]
fn y_axis_ids_are_distinct_and_non_empty() {
    let config = ChartConfiguration::fermenting();
    let density = config.scales.y_density.y_axis_id.as_str();
    let temperature = config.scales.y_temperature.y_axis_id.as_str();

    assert_eq!(density, "y-densities");
    assert_eq!(temperature, "y-temperatures");
    assert!(!density.is_empty());
    assert!(!temperature.is_empty());
    assert_ne!(density, temperature);
}

#[test]
fn axis_colors_are_distinct_literals() {
    let config = ChartConfiguration::fermenting();
    let density = &config.scales.y_density.title.color;
    let temperature = &config.scales.y_temperature.title.color;

    assert_eq!(density.as_str(), "#27013F");
    assert_eq!(temperature.as_str(), "#F27405");
    assert_eq!(density.as_str(), DENSITY_AXIS_COLOR);
    assert_eq!(temperature.as_str(), TEMPERATURE_AXIS_COLOR);
    assert!(!density.same_color(temperature));
}

#[test]
fn index_mode_is_paired_with_non_intersecting_hover() {
    let config = ChartConfiguration::fermenting();

    assert_eq!(config.interaction.mode, InteractionMode::Index);
    assert!(!config.interaction.intersect);
    assert!(config.interaction.pairs_series_by_timestamp());
}

#[test]
fn responsive_chart_does_not_keep_aspect_ratio() {
    let config = ChartConfiguration::fermenting();

    assert!(config.responsive);
    assert!(!config.maintain_aspect_ratio);
    assert_eq!(config.point_style, PointStyle::Toggle(false));
    assert!(!config.point_style.draws_markers());
}

#[test]
fn only_density_axis_draws_chart_area_grid() {
    let config = ChartConfiguration::fermenting();

    assert!(config.scales.y_density.grid.draws_on_chart_area());
    assert_eq!(config.scales.y_density.grid.draw_ticks, Some(true));
    assert!(!config.scales.y_temperature.grid.draws_on_chart_area());
    assert_eq!(config.scales.chart_area_grid_count(), 1);
    assert_eq!(
        config.scales.y_density.border_join_style,
        BorderJoinStyle::Round
    );
    assert_eq!(
        config.scales.y_temperature.border_join_style,
        BorderJoinStyle::Round
    );
}

#[test]
fn decimation_request_defaults_to_lttb() {
    let decimation = ChartConfiguration::fermenting().plugins.decimation;

    assert!(decimation.enabled);
    assert_eq!(decimation.algorithm, DecimationAlgorithm::Lttb);
    assert_eq!(decimation.samples, None);
    assert_eq!(decimation.threshold, None);
}

#[test]
fn default_options_pass_validation() {
    ChartConfiguration::fermenting()
        .validate()
        .expect("shipped options should be valid");
}
