//! End-to-end selector scenarios.

use super::*;
use crate::catalog::StaticCatalogBuilder;
use crate::domain::Mode;
use crate::fixtures::{sample_catalog, station};
use crate::presets::{PresetSpec, builtin_specs, resolve_all};
use crate::reducer::FieldUpdate;

fn line(s: &str) -> LineId {
    LineId::parse(s).unwrap()
}

fn labels(options: &[SelectOption<Station>]) -> Vec<&str> {
    options.iter().map(|o| o.label.as_str()).collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn pick_line_and_endpoints() {
    let catalog = sample_catalog();
    let mut selector = Selector::new(&catalog);

    assert!(!selector.can_swap());
    assert!(selector.from_options().is_empty());

    selector.dispatch(FieldUpdate::SetLine(line("Orange")).into());
    assert!(selector.can_swap());
    assert_eq!(selector.from_options().len(), 8);

    let oak_grove = station(&catalog, "Orange", "Oak Grove");
    selector.dispatch(FieldUpdate::SetFrom(oak_grove).into());
    assert!(!labels(&selector.to_options()).contains(&"Oak Grove"));

    let wellington = station(&catalog, "Orange", "Wellington");
    selector.dispatch(FieldUpdate::SetTo(wellington).into());
    assert!(!labels(&selector.from_options()).contains(&"Wellington"));
    assert!(selector.drift().is_empty());
}

#[test]
fn origin_cannot_take_destination_stop() {
    let catalog = sample_catalog();
    let mut selector = Selector::new(&catalog);

    selector.dispatch(FieldUpdate::SetLine(line("Orange")).into());
    selector.dispatch(FieldUpdate::SetTo(station(&catalog, "Orange", "Oak Grove")).into());
    selector.dispatch(FieldUpdate::SetFrom(station(&catalog, "Orange", "Oak Grove")).into());

    assert!(selector.configuration().from.is_none());
    assert!(selector.drift().is_empty());
}

#[test]
fn swap_then_options_follow() {
    let catalog = sample_catalog();
    let config = Configuration {
        line: Some(line("Red")),
        from: Some(station(&catalog, "Red", "Ashmont")),
        to: Some(station(&catalog, "Red", "Park Street")),
        ..Configuration::default()
    };
    let mut selector = Selector::with_configuration(&catalog, config);

    // From Ashmont, the Braintree branch is out of reach
    assert!(!labels(&selector.to_options()).contains(&"Braintree"));

    selector.dispatch(Action::SwapEndpoints);
    assert_eq!(
        selector.configuration().from.as_ref().map(|s| s.stop_name.as_str()),
        Some("Park Street")
    );
    // From Park Street, both branches are open
    let to = selector.to_options();
    assert!(labels(&to).contains(&"Braintree"));
    assert!(labels(&to).contains(&"Ashmont"));
}

#[test]
fn line_change_leaves_stale_endpoints() {
    let catalog = sample_catalog();
    let mut selector = Selector::new(&catalog);
    selector.dispatch(FieldUpdate::SetLine(line("Orange")).into());
    selector.dispatch(FieldUpdate::SetFrom(station(&catalog, "Orange", "Oak Grove")).into());

    selector.dispatch(FieldUpdate::SetLine(line("Blue")).into());
    let config = selector.configuration();
    assert_eq!(config.from.as_ref().map(|s| s.stop_name.as_str()), Some("Oak Grove"));

    // Blue's options are unaffected by the stale origin
    assert_eq!(selector.to_options().len(), 4);
    assert_eq!(selector.drift().len(), 1);
}

#[test]
fn toggle_mode_resets_and_hides_range() {
    let catalog = sample_catalog();
    let presets = resolve_all(&builtin_specs(), &catalog).unwrap();
    let mut selector = Selector::new(&catalog);

    selector.apply_preset(&presets[0]);
    assert!(selector.show_date_end_picker());

    selector.dispatch(Action::ToggleMode);
    assert!(!selector.show_date_end_picker());
    assert_eq!(selector.configuration(), &Configuration::new(Mode::Bus));
    assert_eq!(
        selector
            .line_options()
            .iter()
            .map(|o| o.label.as_str())
            .collect::<Vec<_>>(),
        vec!["Route 1", "Route 28", "Routes 57/57A"]
    );
}

#[test]
fn preset_scenario_shows_range_from_any_prior_state() {
    let catalog = sample_catalog();
    let preset = PresetSpec::new(
        "Orange slow zones",
        "Orange",
        "Downtown Crossing",
        "Green Street",
        "2021-06-01",
    )
    .until("2021-12-31")
    .resolve(&catalog)
    .unwrap();

    let priors = [
        Configuration::default(),
        Configuration::new(Mode::Bus),
        Configuration {
            line: Some(line("Red")),
            date_start: Some("2020-01-01".into()),
            ..Configuration::default()
        },
    ];

    for prior in priors {
        let mut selector = Selector::with_configuration(&catalog, prior);
        assert!(!selector.show_date_end_picker());
        selector.apply_preset(&preset);
        assert!(selector.show_date_end_picker());
        assert_eq!(selector.configuration(), &preset.value);
    }
}

#[test]
fn single_date_preset_hides_range() {
    let catalog = sample_catalog();
    let presets = resolve_all(&builtin_specs(), &catalog).unwrap();
    let mut selector = Selector::with_configuration(&catalog, presets[0].value.clone());
    assert!(selector.show_date_end_picker());

    selector.apply_preset(&presets[1]);
    assert!(!selector.show_date_end_picker());
    assert!(selector.configuration().bus_mode);
}

#[test]
fn reapplying_same_range_keeps_flag() {
    let catalog = sample_catalog();
    let presets = resolve_all(&builtin_specs(), &catalog).unwrap();
    let mut selector = Selector::new(&catalog);

    selector.apply_preset(&presets[1]);
    selector.show_range();
    assert!(selector.show_date_end_picker());

    // Same (absent) date_end: a fresh copy of the preset is not a trigger
    selector.apply_preset(&presets[1]);
    assert!(selector.show_date_end_picker());
}

#[test]
fn range_controls_lifecycle() {
    let catalog = sample_catalog();
    let mut selector = Selector::new(&catalog);

    selector.dispatch(FieldUpdate::SetDateStart(Some("2021-06-01".into())).into());
    assert!(!selector.show_date_end_picker());

    selector.show_range();
    assert!(selector.show_date_end_picker());

    selector.dispatch(FieldUpdate::SetDateEnd(Some("2021-06-30".into())).into());
    assert!(selector.show_date_end_picker());
    assert!(selector.configuration().is_range());

    selector.dispatch(Action::ClearDateRange);
    assert!(!selector.show_date_end_picker());
    assert!(!selector.configuration().is_range());
    assert_eq!(selector.configuration().date_start.as_deref(), Some("2021-06-01"));
}

#[test]
fn clearing_end_date_picker_hides_range() {
    let catalog = sample_catalog();
    let mut selector = Selector::new(&catalog);

    selector.show_range();
    selector.dispatch(FieldUpdate::SetDateEnd(Some("2021-06-30".into())).into());
    assert!(selector.show_date_end_picker());

    selector.dispatch(FieldUpdate::SetDateEnd(None).into());
    assert!(selector.configuration().date_end.is_none());
    assert!(!selector.show_date_end_picker());
}

#[test]
fn history_restore_is_a_replacement() {
    let catalog = sample_catalog();
    let mut selector = Selector::new(&catalog);

    let restored: Configuration = serde_json::from_str(
        r#"{
            "bus_mode": false,
            "line": "Green",
            "from": {"stop_name": "Mission Park", "order": 14, "branches": ["E"]},
            "to": null,
            "date_start": "2020-01-01",
            "date_end": "2020-05-31"
        }"#,
    )
    .unwrap();

    selector.replace(restored);
    assert!(selector.show_date_end_picker());

    let to = selector.to_options();
    assert!(!labels(&to).contains(&"Riverside"));
    assert!(labels(&to).contains(&"Copley"));
    assert!(labels(&to).contains(&"Lechmere"));
}

#[test]
fn options_recomputed_after_every_change() {
    let catalog = StaticCatalogBuilder::new()
        .subway(
            "Orange",
            vec![
                Station::new("Downtown Crossing", 1),
                Station::new("Green Street", 2),
            ],
        )
        .build();
    let mut selector = Selector::new(&catalog);

    selector.dispatch(FieldUpdate::SetLine(line("Orange")).into());
    assert_eq!(selector.to_options().len(), 2);

    selector.dispatch(FieldUpdate::SetFrom(Station::new("Downtown Crossing", 1)).into());
    assert_eq!(labels(&selector.to_options()), vec!["Green Street"]);

    selector.dispatch(Action::SwapEndpoints);
    assert_eq!(selector.to_options().len(), 2);
    assert_eq!(labels(&selector.from_options()), vec!["Green Street"]);
}

#[test]
fn field_options_and_dates_follow_mode() {
    let catalog = sample_catalog();
    let windows = DateWindows::default();
    let mut selector = Selector::new(&catalog);

    let today = date(2021, 10, 1);
    assert_eq!(selector.available_dates(&windows, today).first, date(2016, 1, 15));
    assert_eq!(selector.options(SelectField::Line).len(), 4);

    selector.dispatch(Action::ToggleMode);
    assert_eq!(selector.available_dates(&windows, today).first, date(2018, 8, 1));
    assert_eq!(selector.options(SelectField::Line).len(), 3);
    assert!(selector.options(SelectField::To).is_empty());
}
