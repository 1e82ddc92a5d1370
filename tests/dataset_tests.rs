use chrono::{TimeZone, Timelike, Utc};
use gpui_tickchart::utils::date_formatter;
use gpui_tickchart::{Bar, BarDataset, ChartView};

fn bar(time: f64, high: f64, low: f64) -> Bar {
    Bar {
        time,
        open: low,
        high,
        low,
        close: high,
        tick_volume: 1.0,
    }
}

#[test]
fn test_upstream_chunk_shape_deserializes() {
    let payload = r#"{
        "ChunkStart": 1704067200,
        "Bars": [
            { "Time": 0, "Open": 100.0, "High": 110.0, "Low": 90.0, "Close": 105.0, "TickVolume": 42 },
            { "Time": 60, "Open": 105.0, "High": 120.0, "Low": 95.0, "Close": 96.0, "TickVolume": 17 }
        ]
    }"#;

    let dataset: BarDataset = serde_json::from_str(payload).unwrap();
    assert_eq!(dataset.chunk_start, 1704067200);
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.bars[0].high, 110.0);
    assert_eq!(dataset.bars[0].tick_volume, 42.0);
    assert_eq!(dataset.bars[1].time, 60.0);
}

#[test]
fn test_empty_dataset_rejected() {
    assert!(BarDataset::new(0, vec![]).is_err());
}

#[test]
fn test_session_rejects_empty_dataset() {
    let dataset = BarDataset {
        chunk_start: 0,
        bars: vec![],
    };
    assert!(ChartView::new(dataset).is_err());
}

#[test]
fn test_price_bounds_fold_over_high_and_low() {
    let dataset = BarDataset::new(0, vec![bar(0.0, 110.0, 90.0), bar(60.0, 120.0, 95.0)]).unwrap();
    assert_eq!(dataset.price_bounds(), (90.0, 120.0));
}

#[test]
fn test_label_time_derivation() {
    // 2024-01-01T00:00:00Z plus 3661 seconds is 01:01:01.
    let chunk_start = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .unwrap()
        .timestamp();

    let dt = date_formatter::wall_clock_time(chunk_start, 3661.0, &Utc).unwrap();
    assert_eq!(dt.hour(), 1);
    assert_eq!(dt.minute(), 1);
    assert_eq!(date_formatter::time_label(chunk_start, 3661.0, &Utc), "1:1");
}

#[test]
fn test_label_respects_timezone_offset() {
    use chrono::FixedOffset;

    let chunk_start = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .unwrap()
        .timestamp();
    let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();

    let dt = date_formatter::wall_clock_time(chunk_start, 3661.0, &plus_two).unwrap();
    assert_eq!(dt.hour(), 3);
    assert_eq!(dt.minute(), 1);
}
