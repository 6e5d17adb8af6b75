#![no_main]

use libfuzzer_sys::fuzz_target;
use pspblob::{as_encoded, BlobCodec, ProfileData};

fuzz_target!(|input: &[u8]| {
    if input.len() < 4 {
        return;
    }
    let week_day_speed = input[0];
    let weekend_speed = input[1];
    let days_mask = input[2] & 0x7F;
    let resolution = [60_u16, 120, 240, 1440][usize::from(input[3]) % 4];
    let bins = usize::from(1440 / resolution);

    // Byte values are all within the encodable speed range.
    let mut speeds = input[4..].iter().map(|&b| f64::from(b));
    let mut days: [Option<Vec<f64>>; 7] = Default::default();
    for (day, slot) in days.iter_mut().enumerate() {
        if days_mask & (1 << day) != 0 {
            *slot = Some((0..bins).map(|_| speeds.next().unwrap_or(33.0)).collect());
        }
    }

    let data = ProfileData::with_profiles(week_day_speed, weekend_speed, resolution, days);
    let codec = BlobCodec::new();
    let blob = codec.encode(&data).expect("valid input must encode");
    let decoded = codec.decode(&blob).expect("encoded blob must decode");

    assert_eq!(decoded.week_day_speed(), week_day_speed);
    assert_eq!(decoded.weekend_speed(), weekend_speed);
    assert_eq!(decoded.time_resolution_minutes(), resolution);
    for day in 0..7_u8 {
        match (data.day_speeds(day), decoded.day_speeds(day)) {
            (Some(expected), Some(actual)) => {
                assert_eq!(expected.len(), actual.len());
                for (e, a) in expected.iter().zip(actual.iter()) {
                    assert_eq!(as_encoded(*e), *a);
                }
            }
            (None, None) => {}
            _ => panic!("day {day} presence changed in roundtrip"),
        }
    }
});
