//! Typed product handlers for the FakeApi.

use super::FakeApi;
use crate::{
    error::Result,
    models::{record::decode, Deleted, List, Product},
    params::{CreateProduct, ListOptions, UpdateProduct},
    schema::defaults::PRODUCT,
};

impl FakeApi {
    pub fn create_product(&self, params: &CreateProduct) -> Result<Product> {
        self.create_as(PRODUCT, &params.to_params(), |record| decode(PRODUCT, record))
    }

    pub fn retrieve_product(&self, id: &str) -> Result<Product> {
        decode(PRODUCT, self.retrieve(PRODUCT, id)?)
    }

    pub fn update_product(&self, id: &str, params: &UpdateProduct) -> Result<Product> {
        self.update_as(PRODUCT, id, &params.to_params(), |record| decode(PRODUCT, record))
    }

    /// Handle deleting a product.
    ///
    /// Plans referencing the product are left alone; references are only
    /// checked when a plan is created.
    pub fn delete_product(&self, id: &str) -> Result<Deleted> {
        self.delete(PRODUCT, id)
    }

    pub fn list_products(&self, options: &ListOptions) -> Result<List<Product>> {
        self.list(PRODUCT, options)?
            .try_map(|record| decode(PRODUCT, record))
    }
}
