use payloads::{
    ProductTypeId,
    query::QueryKey,
    requests::ProductTypeListParams,
    responses::{self, Paginated},
};
use yew::prelude::*;

use crate::{
    get_api_client,
    hooks::{FetchHookReturn, use_query},
};

#[hook]
pub fn use_product_types(
    params: ProductTypeListParams,
) -> FetchHookReturn<Paginated<responses::ProductType>> {
    use_query(QueryKey::ProductTypes(params.clone()), move |_| {
        let params = params.clone();
        async move { get_api_client().list_product_types(&params).await }
    })
}

#[hook]
pub fn use_product_type(
    product_type_id: ProductTypeId,
) -> FetchHookReturn<responses::ProductType> {
    use_query(QueryKey::ProductType(product_type_id), move |_| async move {
        get_api_client().get_product_type(&product_type_id).await
    })
}
