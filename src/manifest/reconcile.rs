use crate::manifest::{ComponentManifest, is_remote_newer};
use tracing::info;

/// Decide whether the remote manifest carries an update over the local one.
///
/// Walks local components in order. A component missing from the remote, or
/// one whose remote version is newer, ends the scan as an update. Matched
/// components are removed from an own copy of `remote`; anything left over
/// afterwards is a component the local install never had, which also counts
/// as an update.
pub fn has_update(local: &ComponentManifest, remote: &ComponentManifest) -> bool {
    let mut unmatched = remote.clone();

    for (component, local_version) in local {
        let Some(remote_version) = unmatched.remove(component) else {
            info!("local component [{component}] not found on remote, update available");
            return true;
        };

        if is_remote_newer(local_version, &remote_version) {
            info!(
                "local component [{component} : {local_version}] older than remote [{remote_version}], update available"
            );
            return true;
        }

        info!("local component [{component} : {local_version}] up to date");
    }

    if let Some(extra) = unmatched.keys().next() {
        info!("remote component [{extra}] not installed locally, update available");
        return true;
    }

    info!("no components to be updated");
    false
}
