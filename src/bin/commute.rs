use small_garage::core::commute::{commute_all, Commuter};
use small_garage::utils::logger;
use small_garage::{CarListing, Commutable, StdoutSink, TwoWheeler, Vehicle};

fn main() {
    logger::init_logger(logger::LogFormat::Compact, false);

    let mut out = StdoutSink;

    let commuter = Commuter::new();
    let bike = TwoWheeler::new();
    let car = Vehicle::default();

    let vehicles: [&dyn Commutable; 3] = [&commuter, &bike, &car];
    let count = commute_all(&vehicles, &mut out);
    tracing::debug!(count, "commute finished");

    bike.balance(&mut out);

    let swift = CarListing {
        wheel_count: 4,
        door_count: 4,
        max_speed: 180,
        name: "Swift".to_string(),
        model: "VXI".to_string(),
        company: "Maruti Suzuki".to_string(),
    };
    println!("{}", swift);
}
