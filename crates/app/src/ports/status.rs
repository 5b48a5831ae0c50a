//! Status port — where device notifications are delivered.

use homeremote_domain::id::DeviceId;
use homeremote_domain::notification::Notification;

/// Outbound port receiving every notification a device action produces.
///
/// Reporting cannot fail from the caller's side: device actions are total,
/// so adapters deal with their own IO errors (typically by logging them).
pub trait StatusReporter: Send + Sync {
    /// Deliver the outcome of one action performed on `device`.
    fn report(&self, device: DeviceId, notification: &Notification);
}
