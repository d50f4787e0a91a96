//! Typed plan handlers for the FakeApi.

use super::FakeApi;
use crate::{
    error::Result,
    models::{record::decode, Deleted, List, Plan},
    params::{CreatePlan, ListOptions, UpdatePlan},
    schema::defaults::PLAN,
};

impl FakeApi {
    /// Handle creating a plan.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use mockpay_core::{FakeApi, Interval, params::{CreatePlan, CreateProduct}};
    /// let api = FakeApi::new();
    /// # api.create_product(&CreateProduct {
    /// #     id: Some("prod_1".to_string()),
    /// #     name: Some("Product".to_string()),
    /// #     ..Default::default()
    /// # })?;
    /// let plan = api.create_plan(&CreatePlan {
    ///     id: Some("gold".to_string()),
    ///     product: Some("prod_1".to_string()),
    ///     amount: Some(2000.into()),
    ///     currency: Some("usd".to_string()),
    ///     interval: Some(Interval::Month),
    ///     ..Default::default()
    /// })?;
    /// assert_eq!(plan.amount, 2000);
    /// # Ok::<(), mockpay_core::RequestError>(())
    /// ```
    pub fn create_plan(&self, params: &CreatePlan) -> Result<Plan> {
        self.create_as(PLAN, &params.to_params(), |record| decode(PLAN, record))
    }

    pub fn retrieve_plan(&self, id: &str) -> Result<Plan> {
        decode(PLAN, self.retrieve(PLAN, id)?)
    }

    /// Handle updating a plan. Fields left `None` keep their stored values.
    pub fn update_plan(&self, id: &str, params: &UpdatePlan) -> Result<Plan> {
        self.update_as(PLAN, id, &params.to_params(), |record| decode(PLAN, record))
    }

    pub fn delete_plan(&self, id: &str) -> Result<Deleted> {
        self.delete(PLAN, id)
    }

    /// Handle listing plans in creation order.
    pub fn list_plans(&self, options: &ListOptions) -> Result<List<Plan>> {
        self.list(PLAN, options)?
            .try_map(|record| decode(PLAN, record))
    }
}
