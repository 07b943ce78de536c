use crate::permission::{MANAGER_MASK, ensure_permission};
use crate::{
    RawFilters, Result, ServiceError, ServiceHandler, convert_list, customer_filters,
    fetch_authorized,
};
use models::agent::Agent;
use models::outdial::{Outdial, OutdialTarget, TargetDestinations};
use models::WebhookConvert;
use uuid::Uuid;

const KIND_TARGET: &str = "outdialtarget";

impl ServiceHandler {
    async fn outdial_get_authorized(&self, a: &Agent, outdial_id: Uuid) -> Result<Outdial> {
        fetch_authorized(a, MANAGER_MASK, self.req.outdial_v1_outdial_get(outdial_id)).await
    }

    /// Target `target_id` of an outdial the caller may manage.
    async fn outdialtarget_get_authorized(
        &self,
        a: &Agent,
        outdial_id: Uuid,
        target_id: Uuid,
    ) -> Result<OutdialTarget> {
        self.outdial_get_authorized(a, outdial_id).await?;

        let target = match self.req.outdial_v1_outdialtarget_get(target_id).await {
            Ok(target) => target,
            Err(err) if err.is_not_found() => return Err(ServiceError::NotFound(KIND_TARGET)),
            Err(err) => return Err(err.into()),
        };
        if target.outdial_id != outdial_id || target.tm_delete.is_some() {
            tracing::debug!(%outdial_id, %target_id, "the target is not part of the outdial");
            return Err(ServiceError::NotFound(KIND_TARGET));
        }
        Ok(target)
    }

    pub async fn outdial_create(
        &self,
        a: &Agent,
        campaign_id: Uuid,
        name: &str,
        detail: &str,
        data: &str,
    ) -> Result<Outdial> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        let res = self
            .req
            .outdial_v1_outdial_create(a.customer_id(), campaign_id, name, detail, data)
            .await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn outdial_get(&self, a: &Agent, outdial_id: Uuid) -> Result<Outdial> {
        let res = self.outdial_get_authorized(a, outdial_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn outdial_list(
        &self,
        a: &Agent,
        size: u64,
        token: &str,
        filters: &RawFilters,
    ) -> Result<Vec<Outdial>> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        let filters = customer_filters::<Outdial>(a, filters)?;
        let res = self
            .req
            .outdial_v1_outdial_list(&self.token_or_now(token), size, &filters)
            .await?;
        Ok(convert_list(res))
    }

    pub async fn outdial_delete(&self, a: &Agent, outdial_id: Uuid) -> Result<Outdial> {
        self.outdial_get_authorized(a, outdial_id).await?;

        let res = self.req.outdial_v1_outdial_delete(outdial_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn outdial_update_basic_info(
        &self,
        a: &Agent,
        outdial_id: Uuid,
        name: &str,
        detail: &str,
    ) -> Result<Outdial> {
        self.outdial_get_authorized(a, outdial_id).await?;

        let res = self
            .req
            .outdial_v1_outdial_update_basic_info(outdial_id, name, detail)
            .await?;
        Ok(res.convert_webhook_message())
    }

    /// Moves the outdial to another campaign of the same customer.
    pub async fn outdial_update_campaign_id(
        &self,
        a: &Agent,
        outdial_id: Uuid,
        campaign_id: Uuid,
    ) -> Result<Outdial> {
        self.outdial_get_authorized(a, outdial_id).await?;
        fetch_authorized(a, MANAGER_MASK, self.req.campaign_v1_campaign_get(campaign_id)).await?;

        let res = self
            .req
            .outdial_v1_outdial_update_campaign_id(outdial_id, campaign_id)
            .await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn outdial_update_data(&self, a: &Agent, outdial_id: Uuid, data: &str) -> Result<Outdial> {
        self.outdial_get_authorized(a, outdial_id).await?;

        let res = self.req.outdial_v1_outdial_update_data(outdial_id, data).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn outdialtarget_create(
        &self,
        a: &Agent,
        outdial_id: Uuid,
        name: &str,
        detail: &str,
        data: &str,
        destinations: &TargetDestinations,
    ) -> Result<OutdialTarget> {
        self.outdial_get_authorized(a, outdial_id).await?;

        let res = self
            .req
            .outdial_v1_outdialtarget_create(outdial_id, name, detail, data, destinations)
            .await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn outdialtarget_get(&self, a: &Agent, outdial_id: Uuid, target_id: Uuid) -> Result<OutdialTarget> {
        let res = self.outdialtarget_get_authorized(a, outdial_id, target_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn outdialtarget_delete(
        &self,
        a: &Agent,
        outdial_id: Uuid,
        target_id: Uuid,
    ) -> Result<OutdialTarget> {
        self.outdialtarget_get_authorized(a, outdial_id, target_id).await?;

        let res = self.req.outdial_v1_outdialtarget_delete(target_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn outdialtarget_list(
        &self,
        a: &Agent,
        outdial_id: Uuid,
        size: u64,
        token: &str,
    ) -> Result<Vec<OutdialTarget>> {
        self.outdial_get_authorized(a, outdial_id).await?;

        let res = self
            .req
            .outdial_v1_outdialtarget_list(outdial_id, &self.token_or_now(token), size)
            .await?;
        Ok(convert_list(res))
    }
}

#[cfg(test)]
mod tests {
    use crate::ServiceError;
    use crate::testing;
    use models::agent::Permission;
    use models::campaign::Campaign;
    use models::outdial::{Outdial, OutdialTarget};
    use models::Identity;
    use requesthandler::testutils::{json_response, status_response};
    use requesthandler::{QueueName, RequestMethod};
    use serde_json::json;
    use uuid::Uuid;

    fn outdial(customer_id: Uuid) -> Outdial {
        Outdial {
            identity: Identity::new(Uuid::new_v4(), customer_id),
            name: "leads".into(),
            ..Default::default()
        }
    }

    fn target(outdial_id: Uuid) -> OutdialTarget {
        OutdialTarget {
            id: Uuid::new_v4(),
            outdial_id,
            name: "lead 1".into(),
            ..Default::default()
        }
    }

    fn expect_outdial(mock: &requesthandler::testutils::MockSock, o: &Outdial) {
        mock.expect(
            QueueName::Outdial.as_str(),
            RequestMethod::Get,
            &format!("/v1/outdials/{}", o.identity.id),
            json_response(o),
        );
    }

    #[tokio::test]
    async fn test_outdial_create() {
        let (handler, mock) = testing::handler();
        let customer_id = Uuid::new_v4();
        let campaign_id = Uuid::new_v4();
        let a = testing::agent(customer_id, Permission::CUSTOMER_MANAGER);
        mock.expect_with_body(
            QueueName::Outdial.as_str(),
            RequestMethod::Post,
            "/v1/outdials",
            json!({
                "customer_id": customer_id,
                "campaign_id": campaign_id,
                "name": "leads",
                "detail": "may leads",
                "data": "",
            }),
            json_response(&outdial(customer_id)),
        );

        let res = handler
            .outdial_create(&a, campaign_id, "leads", "may leads", "")
            .await
            .unwrap();
        assert_eq!(res.name, "leads");
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_outdial_update_campaign_of_other_customer() {
        let (handler, mock) = testing::handler();
        let customer_id = Uuid::new_v4();
        let a = testing::agent(customer_id, Permission::CUSTOMER_ADMIN);
        let o = outdial(customer_id);
        let campaign = Campaign {
            identity: Identity::new(Uuid::new_v4(), Uuid::new_v4()),
            ..Default::default()
        };
        expect_outdial(&mock, &o);
        mock.expect(
            QueueName::Campaign.as_str(),
            RequestMethod::Get,
            &format!("/v1/campaigns/{}", campaign.identity.id),
            json_response(&campaign),
        );

        let err = handler
            .outdial_update_campaign_id(&a, o.identity.id, campaign.identity.id)
            .await
            .unwrap_err();
        assert!(err.is_forbidden());
        assert_eq!(mock.calls().len(), 2);
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_outdialtarget_get_wrong_outdial() {
        let (handler, mock) = testing::handler();
        let customer_id = Uuid::new_v4();
        let a = testing::agent(customer_id, Permission::CUSTOMER_ADMIN);
        let o = outdial(customer_id);
        let t = target(Uuid::new_v4());
        expect_outdial(&mock, &o);
        mock.expect(
            QueueName::Outdial.as_str(),
            RequestMethod::Get,
            &format!("/v1/outdialtargets/{}", t.id),
            json_response(&t),
        );

        let err = handler
            .outdialtarget_get(&a, o.identity.id, t.id)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound("outdialtarget")));
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_outdialtarget_delete() {
        let (handler, mock) = testing::handler();
        let customer_id = Uuid::new_v4();
        let a = testing::agent(customer_id, Permission::CUSTOMER_ADMIN);
        let o = outdial(customer_id);
        let t = target(o.identity.id);
        expect_outdial(&mock, &o);
        mock.expect(
            QueueName::Outdial.as_str(),
            RequestMethod::Get,
            &format!("/v1/outdialtargets/{}", t.id),
            json_response(&t),
        );
        mock.expect(
            QueueName::Outdial.as_str(),
            RequestMethod::Delete,
            &format!("/v1/outdialtargets/{}", t.id),
            json_response(&OutdialTarget {
                tm_delete: testing::deleted_at(),
                ..t.clone()
            }),
        );

        let res = handler
            .outdialtarget_delete(&a, o.identity.id, t.id)
            .await
            .unwrap();
        assert_eq!(res.id, t.id);
        assert!(res.tm_delete.is_some());
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_outdialtarget_get_missing() {
        let (handler, mock) = testing::handler();
        let customer_id = Uuid::new_v4();
        let a = testing::agent(customer_id, Permission::CUSTOMER_ADMIN);
        let o = outdial(customer_id);
        let target_id = Uuid::new_v4();
        expect_outdial(&mock, &o);
        mock.expect(
            QueueName::Outdial.as_str(),
            RequestMethod::Get,
            &format!("/v1/outdialtargets/{target_id}"),
            status_response(404),
        );

        let err = handler
            .outdialtarget_get(&a, o.identity.id, target_id)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound("outdialtarget")));
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_outdialtarget_list_other_customer() {
        let (handler, mock) = testing::handler();
        let a = testing::agent(Uuid::new_v4(), Permission::CUSTOMER_ADMIN);
        let o = outdial(Uuid::new_v4());
        expect_outdial(&mock, &o);

        let err = handler
            .outdialtarget_list(&a, o.identity.id, 10, "")
            .await
            .unwrap_err();
        assert!(err.is_forbidden());
        assert_eq!(mock.calls().len(), 1);
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_outdialtarget_list() {
        let (handler, mock) = testing::handler();
        let customer_id = Uuid::new_v4();
        let a = testing::agent(customer_id, Permission::CUSTOMER_ADMIN);
        let o = outdial(customer_id);
        expect_outdial(&mock, &o);
        mock.expect(
            QueueName::Outdial.as_str(),
            RequestMethod::Get,
            &format!(
                "/v1/outdials/{}/targets?page_token={}&page_size=10",
                o.identity.id,
                testing::now_token_escaped()
            ),
            json_response(&vec![target(o.identity.id)]),
        );

        let res = handler
            .outdialtarget_list(&a, o.identity.id, 10, "")
            .await
            .unwrap();
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].outdial_id, o.identity.id);
        mock.assert_done();
    }
}
