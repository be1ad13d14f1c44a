#![no_main]

use house_map_viewer::{Dataset, FilterAttribute};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(dataset) = Dataset::from_json_str(json) {
        for record in dataset.records() {
            assert!((-90.0..=90.0).contains(&record.lat));
            assert!((-180.0..=180.0).contains(&record.lon));
            assert!(dataset.get(record.id).is_some());
        }
        let options = dataset.distinct_values(FilterAttribute::Street);
        for option in options {
            assert!(dataset.count_with(FilterAttribute::Street, &option.value) > 0);
        }
    }
});
