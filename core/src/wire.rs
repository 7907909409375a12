// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Serde support: a timeframe is written as its canonical string.

use std::fmt;

use jiff::civil::Date;
use serde::de;

use crate::timeframe::Timeframe;

impl serde::Serialize for Timeframe {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Timeframe {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct TimeframeVisitor;

        impl<'de> de::Visitor<'de> for TimeframeVisitor {
            type Value = Timeframe;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(
                    r#"a "YYYY-MM-DD/YYYY-MM-DD" string or a map with start and end dates"#,
                )
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value.parse().map_err(de::Error::custom)
            }

            // Older payloads stored the two bounds as separate fields
            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut start: Option<String> = None;
                let mut end: Option<String> = None;
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "startDate" | "start_date" => start = Some(map.next_value()?),
                        "endDate" | "end_date" => end = Some(map.next_value()?),
                        _ => {
                            map.next_value::<de::IgnoredAny>()?;
                        }
                    }
                }

                let start = start.ok_or_else(|| de::Error::missing_field("start_date"))?;
                let end = end.ok_or_else(|| de::Error::missing_field("end_date"))?;
                let parse = |s: &str| {
                    s.parse::<Date>()
                        .map_err(|e| de::Error::custom(format!("invalid date `{s}`: {e}")))
                };
                Timeframe::of(parse(&start)?, parse(&end)?).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(TimeframeVisitor)
    }
}
