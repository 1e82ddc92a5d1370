use gpui::prelude::*;
use gpui::*;
use gpui_tickchart::{Bar, BarDataset, ChartView};
use rand::Rng;

struct DemoApp {
    chart: Entity<ChartView>,
}

impl Render for DemoApp {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div().size_full().child(self.chart.clone())
    }
}

/// One hour of synthetic one-minute bars as a random walk.
fn sample_chunk() -> BarDataset {
    let chunk_start = chrono::Utc::now().timestamp();
    let mut rng = rand::rng();
    let mut price: f64 = 100.0;

    let mut bars = Vec::new();
    for i in 0..60 {
        let open = price;
        let close = price + rng.random_range(-2.0..2.0);
        let high = open.max(close) + rng.random_range(0.0..1.5);
        let low = open.min(close) - rng.random_range(0.0..1.5);
        bars.push(Bar {
            time: i as f64 * 60.0,
            open,
            high,
            low,
            close,
            tick_volume: rng.random_range(10.0..500.0),
        });
        price = close;
    }

    BarDataset { chunk_start, bars }
}

fn main() {
    let view = ChartView::new(sample_chunk()).expect("demo chunk is non-empty");

    Application::new().run(move |cx: &mut App| {
        cx.open_window(WindowOptions::default(), |_window, cx| {
            let chart = cx.new(|_| view);
            cx.new(|_| DemoApp { chart })
        })
        .expect("failed to open window");
    });
}
