// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod records;
mod topography;

use crate::{SiteIndicator, VelocityProfile, VelocityProfileData};

fn create_test_layer() -> VelocityProfileData {
    VelocityProfileData::new(1800.0, 750.0, 320.0, 0.0, 12.5)
}

fn create_test_profile() -> VelocityProfile {
    VelocityProfile::new(3, vec![create_test_layer()])
}

fn create_test_ec8() -> SiteIndicator {
    SiteIndicator::ec8("B").with_methods(vec![String::from("MASW")])
}
