use crate::raw::{codes, RawSensor};

/// Kind of sensor reported by controller sensor events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SensorKind {
    Invalid,
    Unknown,
    Accelerometer,
    Gyroscope,
}

impl SensorKind {
    pub(crate) fn from_raw(value: i32) -> Self {
        match value {
            1 => SensorKind::Accelerometer,
            2 => SensorKind::Gyroscope,
            0 => SensorKind::Unknown,
            _ => SensorKind::Invalid,
        }
    }

    pub(crate) fn to_raw(self) -> i32 {
        match self {
            SensorKind::Invalid => -1,
            SensorKind::Unknown => 0,
            SensorKind::Accelerometer => 1,
            SensorKind::Gyroscope => 2,
        }
    }
}

event_variant! {
    /// Reading from a standalone sensor.
    SensorEvent(RawSensor) => Event::Sensor, member = sensor, default = codes::SENSORUPDATE
}

impl SensorEvent {
    /// Instance id of the sensor.
    pub fn which(&self) -> i32 {
        self.raw.which
    }

    pub fn set_which(&mut self, which: i32) {
        self.raw.which = which;
    }

    /// Up to six sensor values; meaning depends on the sensor.
    pub fn data(&self) -> [f32; 6] {
        self.raw.data
    }

    pub fn set_data(&mut self, data: [f32; 6]) {
        self.raw.data = data;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_round_trips() {
        let mut event = SensorEvent::new();
        event.set_which(9);
        event.set_data([0.5, -1.0, 9.81, 0.0, 0.0, 1.0]);

        assert_eq!(event.which(), 9);
        assert_eq!(event.data()[2], 9.81);
    }

    #[test]
    fn sensor_kind_codes() {
        for kind in [
            SensorKind::Invalid,
            SensorKind::Unknown,
            SensorKind::Accelerometer,
            SensorKind::Gyroscope,
        ] {
            assert_eq!(SensorKind::from_raw(kind.to_raw()), kind);
        }
        assert_eq!(SensorKind::from_raw(17), SensorKind::Invalid);
    }
}
