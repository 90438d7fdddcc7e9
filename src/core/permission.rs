use crate::models::UserRole;

/// Whether `role` may change an appointment's status.
///
/// Moderation is opt-in: with it disabled everyone may edit. With it enabled
/// only moderators and admins may, and an unknown role never may.
pub fn can_modify_status(role: Option<UserRole>, moderation_enabled: bool) -> bool {
    if !moderation_enabled {
        return true;
    }
    role.is_some_and(|r| r.is_privileged())
}
