use small_garage::{Car, DriveOutcome, Vehicle};

const EMPTY: &str = "Cannot drive, fuel tank is empty.";
const LOW: &str = "Warning: Low fuel level. Please refuel soon.";
const DRIVING: &str = "Car is driving";

/// 從 50 公升開 46 次後剩 4 公升，下一次出現低油量警告
#[test]
fn test_drive_down_to_low_fuel() {
    let mut car = Car::new(Vehicle::default(), Vec::new());

    for _ in 0..46 {
        assert_eq!(car.drive(), DriveOutcome::Driving);
    }
    assert_eq!(car.current_fuel_level(), 4.0);

    assert_eq!(car.drive(), DriveOutcome::LowFuel);
    assert_eq!(car.current_fuel_level(), 3.0);

    let (_, lines) = car.into_parts();
    assert_eq!(lines.len(), 47);
    assert!(lines[..46].iter().all(|line| line == DRIVING));
    assert_eq!(lines[46], LOW);
}

#[test]
fn test_empty_tank_is_idempotent() {
    let vehicle = Vehicle {
        fuel_liters: 0.0,
        ..Vehicle::default()
    };
    let mut car = Car::new(vehicle, Vec::new());

    for _ in 0..5 {
        assert_eq!(car.drive(), DriveOutcome::EmptyTank);
        assert_eq!(car.current_fuel_level(), 0.0);
    }

    let (_, lines) = car.into_parts();
    assert_eq!(lines, vec![EMPTY; 5]);
}

#[test]
fn test_drive_until_empty_then_refuel() {
    let vehicle = Vehicle {
        fuel_liters: 6.0,
        ..Vehicle::with_color("Red")
    };
    let mut car = Car::new(vehicle, Vec::new());

    let outcomes: Vec<DriveOutcome> = (0..8).map(|_| car.drive()).collect();
    assert_eq!(
        outcomes,
        vec![
            DriveOutcome::Driving,
            DriveOutcome::Driving,
            DriveOutcome::LowFuel,
            DriveOutcome::LowFuel,
            DriveOutcome::LowFuel,
            DriveOutcome::LowFuel,
            DriveOutcome::EmptyTank,
            DriveOutcome::EmptyTank,
        ]
    );
    assert_eq!(car.current_fuel_level(), 0.0);

    car.add_fuel(20.0);
    assert_eq!(car.current_fuel_level(), 20.0);
    assert_eq!(car.drive(), DriveOutcome::Driving);
    assert_eq!(car.current_fuel_level(), 19.0);
}

#[test]
fn test_fractional_fuel_skips_empty_tank() {
    // 0.5 公升不等於 0，仍走低油量分支並扣到負值
    let vehicle = Vehicle {
        fuel_liters: 0.5,
        ..Vehicle::default()
    };
    let mut car = Car::new(vehicle, Vec::new());

    assert_eq!(car.drive(), DriveOutcome::LowFuel);
    assert_eq!(car.current_fuel_level(), -0.5);
    assert_eq!(car.drive(), DriveOutcome::LowFuel);
    assert_eq!(car.current_fuel_level(), -1.5);
}

#[test]
fn test_add_fuel_returns_exact_sum() {
    for (start, amount) in [(50.0, 20.0), (0.0, 0.1), (4.0, -4.0), (12.5, 0.0)] {
        let vehicle = Vehicle {
            fuel_liters: start,
            ..Vehicle::default()
        };
        let mut car = Car::new(vehicle, Vec::new());
        car.add_fuel(amount);
        assert_eq!(car.current_fuel_level(), start + amount);
    }
}

#[test]
fn test_bare_vehicle_assigned_by_caller() {
    let mut vehicle = Vehicle::bare();
    vehicle.wheel_count = 4;
    vehicle.color = "Red".to_string();
    vehicle.max_speed = 200.0;
    vehicle.fuel_liters = 50.0;
    vehicle.seat_count = 5;

    let mut car = Car::new(vehicle, Vec::new());
    car.drive();
    car.add_fuel(20.0);

    assert_eq!(car.current_fuel_level(), 69.0);
    assert_eq!(car.vehicle().color, "Red");
}
