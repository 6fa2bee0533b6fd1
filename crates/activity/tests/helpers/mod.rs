use vitaplan_activity::ActivityRecord;

pub fn activity(description: &str, heading: &str, met: f64) -> ActivityRecord {
    ActivityRecord::new(description, heading, met).unwrap()
}

/// Small accessible catalog with a mix of cardio, strength and flexibility.
pub fn mixed_catalog() -> Vec<ActivityRecord> {
    vec![
        activity("Walking, brisk pace", "Walking", 3.8),
        activity("Bicycling, 12-14 mph, moderate", "Bicycling", 8.0),
        activity("Swimming laps, freestyle, light", "Water activities", 5.8),
        activity("Resistance training, multiple exercises", "Conditioning exercise", 3.5),
        activity("Yoga, Hatha", "Conditioning exercise", 2.5),
        activity("Jogging, general", "Running", 7.0),
        activity("Skiing, downhill, moderate", "Winter activities", 5.3),
        activity("Horseback riding, trotting", "Horseback riding", 5.8),
    ]
}

pub fn denied_catalog() -> Vec<ActivityRecord> {
    vec![
        activity("Skiing, cross country", "Winter activities", 9.0),
        activity("Skateboarding", "Sports", 5.0),
        activity("Rock climbing, ascending", "Sports", 7.3),
    ]
}
