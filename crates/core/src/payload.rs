use crate::error::MaterializeError;
use crate::models::IconRole;
use base64::prelude::*;
use sha2::{Digest, Sha256};

/// Tabs that get an icon pair, in output order.
pub const TAB_IDENTIFIERS: [&str; 4] = ["home", "property", "contract", "profile"];

pub const ICON_EXTENSION: &str = "png";

/// 50x50 gray circle PNG, used for unselected tabs.
pub const GRAY_ICON: &str = "iVBORw0KGgoAAAANSUhEUgAAADIAAAAyCAYAAAAeP4ixAAAABHNCSVQICAgIfAhkiAAAAAlwSFlzAAALEwAACxMBAJqcGAAAAJlJREFUaIHtz0EKwCAMRNHp/Q/dZpFCoSCKjjP/baC4+MQoAAAAAPBnRNzrPU96Zu7bPSI+tn1xc6xE5HV5s+26vNk2C5FX5c222TYLkVflzbbZNguRV+XNttk2C5FX5c222TYLkVflzbbZNguRV+XNttk2C5FX5c222TYLkVflzbbZNguRV+XNttk2CwEAAAAAAPAKP9p1UQXH7iUAAAAASUVORK5CYII=";

/// 50x50 blue circle PNG, used for the selected tab.
pub const BLUE_ICON: &str = "iVBORw0KGgoAAAANSUhEUgAAADIAAAAyCAYAAAAeP4ixAAAABHNCSVQICAgIfAhkiAAAAAlwSFlzAAALEwAACxMBAJqcGAAAAKBJREFUaIHtz0EKwCAMRNHp/Q/dZpFCoSCKjjP/raBZ/IkRAAAAAMCfich3e8+Tntn17R4RH9u+uDlWIvL6+mbb93mzbRYiL8ubbdflzbZZiLwsb7Z9nzfbZiHysrzZdl3ebJuFyMvyZtv3ebNtFiIvy5tt1+XNtlmIvCxvtn2fN9tmIfKyvNl2Xd5sm4UAAAAAAABYyg8H2VF5RKT0hwAAAABJRU5ErkJggg==";

/// Decode one embedded payload. Strict: padding and trailing bits must be
/// canonical, nothing is truncated.
pub fn decode_payload(role: IconRole, encoded: &str) -> Result<Vec<u8>, MaterializeError> {
    BASE64_STANDARD
        .decode(encoded)
        .map_err(|source| MaterializeError::Decode { role, source })
}

pub fn compute_sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
