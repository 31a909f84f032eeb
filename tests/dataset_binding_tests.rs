use ferment_chart::api::{ChartConfiguration, DENSITY_AXIS_ID, TEMPERATURE_AXIS_ID};
use ferment_chart::core::AxisId;
use ferment_chart::{ChartError, DatasetBinding};

fn binding(label: &str, axis_id: &str) -> DatasetBinding {
    DatasetBinding::new(label, AxisId::new(axis_id).expect("valid axis id"))
}

#[test]
fn one_dataset_per_axis_is_accepted() {
    let config = ChartConfiguration::fermenting();
    let datasets = [
        binding("Density", DENSITY_AXIS_ID),
        binding("Temperature", TEMPERATURE_AXIS_ID),
    ];

    config
        .check_dataset_bindings(&datasets)
        .expect("bindings should match");
}

#[test]
fn dataset_order_does_not_matter() {
    let config = ChartConfiguration::fermenting();
    let datasets = [
        binding("Temperature", TEMPERATURE_AXIS_ID),
        binding("Density", DENSITY_AXIS_ID),
    ];

    assert!(config.check_dataset_bindings(&datasets).is_ok());
}

#[test]
fn missing_temperature_dataset_is_reported() {
    let config = ChartConfiguration::fermenting();
    let datasets = [binding("Density", DENSITY_AXIS_ID)];

    assert_eq!(
        config.check_dataset_bindings(&datasets),
        Err(ChartError::UnboundAxis {
            axis_id: TEMPERATURE_AXIS_ID.to_owned()
        })
    );
}

#[test]
fn empty_dataset_list_reports_first_axis() {
    let config = ChartConfiguration::fermenting();

    assert_eq!(
        config.check_dataset_bindings(&[]),
        Err(ChartError::UnboundAxis {
            axis_id: DENSITY_AXIS_ID.to_owned()
        })
    );
}

#[test]
fn two_datasets_on_one_axis_are_reported() {
    let config = ChartConfiguration::fermenting();
    let datasets = [
        binding("Density", DENSITY_AXIS_ID),
        binding("Density (smoothed)", DENSITY_AXIS_ID),
        binding("Temperature", TEMPERATURE_AXIS_ID),
    ];

    assert_eq!(
        config.check_dataset_bindings(&datasets),
        Err(ChartError::AmbiguousAxisBinding {
            axis_id: DENSITY_AXIS_ID.to_owned(),
            count: 2
        })
    );
}

#[test]
fn unknown_axis_is_reported_with_dataset_label() {
    let config = ChartConfiguration::fermenting();
    let datasets = [
        binding("Density", DENSITY_AXIS_ID),
        binding("Temperature", TEMPERATURE_AXIS_ID),
        binding("Pressure", "y-pressures"),
    ];

    assert_eq!(
        config.check_dataset_bindings(&datasets),
        Err(ChartError::UnknownAxisBinding {
            label: "Pressure".to_owned(),
            axis_id: "y-pressures".to_owned()
        })
    );
}

#[test]
fn binding_serializes_with_renderer_key() {
    let json = serde_json::to_value(binding("Density", DENSITY_AXIS_ID)).expect("serialize");

    assert_eq!(
        json,
        serde_json::json!({ "label": "Density", "yAxisID": "y-densities" })
    );
}
