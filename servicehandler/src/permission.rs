//! Authorization of an agent against the customer owning a resource.

use crate::errors::{Result, ServiceError};
use crate::metrics_defs::PERMISSION_DENIED;
use models::agent::{Agent, Permission};
use shared::counter;
use uuid::Uuid;

/// Mask most operations require: any admin or manager of the owning customer.
pub const MANAGER_MASK: Permission = Permission::from_bits(
    Permission::CUSTOMER_ADMIN.bits() | Permission::CUSTOMER_MANAGER.bits(),
);

/// True if `agent` may act on a resource owned by `customer_id` with any role in `mask`.
///
/// A project super admin passes regardless of tenant.
pub fn has_permission(agent: &Agent, customer_id: Uuid, mask: Permission) -> bool {
    if agent.permission.intersects(Permission::PROJECT_SUPER_ADMIN) {
        return true;
    }

    agent.customer_id() == customer_id && agent.permission.intersects(mask)
}

/// [`has_permission`] that fails with [`ServiceError::NoPermission`].
pub fn ensure_permission(agent: &Agent, customer_id: Uuid, mask: Permission) -> Result<()> {
    ensure(agent, customer_id, mask, ServiceError::NoPermission)
}

pub(crate) fn ensure(
    agent: &Agent,
    customer_id: Uuid,
    mask: Permission,
    denied: ServiceError,
) -> Result<()> {
    if has_permission(agent, customer_id, mask) {
        return Ok(());
    }

    counter!(PERMISSION_DENIED).increment(1);
    tracing::info!(
        agent_id = %agent.id(),
        agent_customer_id = %agent.customer_id(),
        %customer_id,
        mask = ?mask,
        "permission denied"
    );
    Err(denied)
}

pub fn is_super_admin(agent: &Agent) -> bool {
    agent.permission.intersects(Permission::PROJECT_SUPER_ADMIN)
}

pub(crate) fn ensure_super_admin(agent: &Agent) -> Result<()> {
    if is_super_admin(agent) {
        return Ok(());
    }

    counter!(PERMISSION_DENIED).increment(1);
    tracing::info!(agent_id = %agent.id(), "operation requires a super admin");
    Err(ServiceError::NoPermission)
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::Identity;

    fn agent(customer_id: Uuid, permission: Permission) -> Agent {
        Agent {
            identity: Identity::new(Uuid::new_v4(), customer_id),
            permission,
            ..Default::default()
        }
    }

    #[test]
    fn test_same_customer_needs_a_matching_role() {
        let customer_id = Uuid::new_v4();

        let admin = agent(customer_id, Permission::CUSTOMER_ADMIN);
        assert!(has_permission(&admin, customer_id, MANAGER_MASK));
        assert!(has_permission(&admin, customer_id, Permission::CUSTOMER_ADMIN));

        let manager = agent(customer_id, Permission::CUSTOMER_MANAGER);
        assert!(has_permission(&manager, customer_id, MANAGER_MASK));
        assert!(!has_permission(&manager, customer_id, Permission::CUSTOMER_ADMIN));

        let plain = agent(customer_id, Permission::CUSTOMER_AGENT);
        assert!(!has_permission(&plain, customer_id, MANAGER_MASK));
        assert!(has_permission(&plain, customer_id, Permission::ALL));

        let none = agent(customer_id, Permission::NONE);
        assert!(!has_permission(&none, customer_id, Permission::ALL));
    }

    #[test]
    fn test_other_customer_is_rejected() {
        let admin = agent(Uuid::new_v4(), Permission::CUSTOMER_ALL);
        assert!(!has_permission(&admin, Uuid::new_v4(), Permission::ALL));
        assert!(ensure_permission(&admin, Uuid::new_v4(), MANAGER_MASK).is_err());
    }

    #[test]
    fn test_super_admin_crosses_tenants() {
        let sa = agent(Uuid::new_v4(), Permission::PROJECT_SUPER_ADMIN);
        assert!(has_permission(&sa, Uuid::new_v4(), Permission::CUSTOMER_ADMIN));
        assert!(has_permission(&sa, Uuid::new_v4(), Permission::NONE));
        assert!(is_super_admin(&sa));
    }

    #[test]
    fn test_exhaustive_against_definition() {
        let own = Uuid::new_v4();
        let other = Uuid::new_v4();
        let bits = [0x0000, 0x0001, 0x0010, 0x0020, 0x0040, 0x0060, 0x00F0, 0xFFFF];

        for agent_bits in bits {
            for mask_bits in bits {
                for target in [own, other] {
                    let a = agent(own, Permission::from_bits(agent_bits));
                    let mask = Permission::from_bits(mask_bits);
                    let expected = (own == target && agent_bits & mask_bits != 0) || agent_bits & 0x0001 != 0;
                    assert_eq!(
                        has_permission(&a, target, mask),
                        expected,
                        "agent {agent_bits:#x} mask {mask_bits:#x}"
                    );
                }
            }
        }
    }
}
