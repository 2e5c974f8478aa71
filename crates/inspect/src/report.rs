// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text summaries of validated sites.

use sitexml_model::{Site, SiteIndicator};

/// Summarizes a site in a short indented block, one line per field present.
#[must_use]
pub fn summarize(site: &Site) -> String {
    let mut lines: Vec<String> = vec![format!("Station {}", site.station_code())];

    if let Some(description) = site.site_description() {
        let mut position: String = format!(
            "  position: {}, {}",
            description.latitude(),
            description.longitude()
        );
        if let Some(altitude) = description.altitude() {
            position.push_str(&format!(" (altitude {altitude} m)"));
        }
        lines.push(position);

        match (description.topology_a(), description.topology_b()) {
            (None, None) => {}
            (a, b) => lines.push(format!(
                "  topography: A={}, B={}",
                a.map_or_else(|| String::from("-"), |a| a.to_string()),
                b.map_or_else(|| String::from("-"), |b| b.to_string())
            )),
        }
        if let Some(morphology) = description.morphology() {
            lines.push(format!("  morphology: {morphology}"));
        }

        let indicators = [
            description.ec8(),
            description.h800(),
            description.bedrock_depth(),
            description.geological_unit(),
        ];
        lines.extend(indicators.into_iter().flatten().map(indicator_line));
    }

    if let Some(parameters) = site.site_characterization_parameters() {
        let indicators = [parameters.velocity_s30(), parameters.resonance_frequency()];
        lines.extend(indicators.into_iter().flatten().map(indicator_line));
        lines.push(format!(
            "  velocity profiles: {}",
            parameters.velocity_profile().len()
        ));
    }

    if let Some(quality) = site.overall_quality_index() {
        lines.push(format!("  overall quality index: {quality}"));
    }

    lines.join("\n")
}

fn indicator_line(indicator: &SiteIndicator) -> String {
    let mut line: String = format!("  {}: {}", indicator.name(), indicator.value());
    if let Some(uncertainty) = indicator.uncertainty() {
        line.push_str(&format!(" +/- {uncertainty}"));
    }
    if !indicator.methods().is_empty() {
        line.push_str(&format!(" [{}]", indicator.methods().join(", ")));
    }
    line
}
