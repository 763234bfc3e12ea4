use criterion::{Criterion, black_box, criterion_group, criterion_main};

use phoneintel::{
    CarrierMapper, Geocoder, PrefixCarrierMapper, PrefixGeocoder, PrefixTimezoneMapper,
    TimezoneMapper,
};

fn setup_numbers() -> Vec<phonenumber::PhoneNumber> {
    ["+14155552671", "+12125550199", "+447701234567", "+34912345678", "+41223456789"]
        .iter()
        .map(|s| phonenumber::parse(None, s).unwrap())
        .collect()
}

fn lookup_benchmark(c: &mut Criterion) {
    let numbers = setup_numbers();
    let geocoder = PrefixGeocoder::new();
    let carriers = PrefixCarrierMapper::new();
    let timezones = PrefixTimezoneMapper::new();

    // First lookups build the prefix tables, keep them out of the timings.
    for number in &numbers {
        geocoder.location_for(number, "en");
        carriers.carrier_for(number, "en");
        timezones.timezones_for(number);
    }

    let mut group = c.benchmark_group("Prefix Lookups");

    group.bench_function("location_for()", |b| {
        b.iter(|| {
            for number in &numbers {
                black_box(geocoder.location_for(black_box(number), "en"));
            }
        })
    });

    group.bench_function("carrier_for()", |b| {
        b.iter(|| {
            for number in &numbers {
                black_box(carriers.carrier_for(black_box(number), "en"));
            }
        })
    });

    group.bench_function("timezones_for()", |b| {
        b.iter(|| {
            for number in &numbers {
                black_box(timezones.timezones_for(black_box(number)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, lookup_benchmark);
criterion_main!(benches);
