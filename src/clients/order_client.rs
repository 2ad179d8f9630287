use tracing::{error, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::clients::{UserClient, VendorClient};
use crate::domain::{Cart, Order, OrderCreate, OrderStatus, UserRole};
use crate::error::OrderError;
use crate::order_actor::{OrderAction, OrderActionResult, OrderQuery};

/// Client for the order actor.
///
/// This client handles the checkout orchestration: the student and vendor
/// are validated before the order is created.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    user_client: UserClient,
    vendor_client: VendorClient,
}

impl OrderClient {
    pub fn new(
        inner: ResourceClient<Order>,
        user_client: UserClient,
        vendor_client: VendorClient,
    ) -> Self {
        Self {
            inner,
            user_client,
            vendor_client,
        }
    }

    /// Checks the cart out into a new Pending order.
    ///
    /// The cart must be non-empty, the student must exist with the Student
    /// role, and the vendor must exist and be open. On success the new
    /// order's id is returned and the caller's cart is emptied; on any
    /// failure the cart is left exactly as it was.
    #[instrument(skip(self, cart))]
    pub async fn place_order(
        &self,
        cart: &mut Cart,
        student_id: &str,
        vendor_id: &str,
        delivery_address: &str,
    ) -> Result<String, OrderError> {
        info!("Processing checkout");

        if cart.is_empty() {
            error!("Checkout rejected: cart is empty");
            return Err(OrderError::EmptyCart);
        }

        // Step 1: validate the student
        match self.user_client.get_user(student_id.to_owned()).await {
            Ok(Some(user)) if user.role == UserRole::Student => {
                info!(student_name = %user.name, "Student validation successful");
            }
            Ok(_) => {
                error!("Student validation failed");
                return Err(OrderError::InvalidStudent(student_id.to_owned()));
            }
            Err(e) => {
                error!(error = %e, "User directory unavailable");
                return Err(OrderError::ActorClosed);
            }
        }

        // Step 2: validate the vendor and its storefront
        match self.vendor_client.get_vendor(vendor_id.to_owned()).await {
            Ok(Some(vendor)) if vendor.is_open => {
                info!(vendor_name = %vendor.name, "Vendor validation successful");
            }
            Ok(Some(vendor)) => {
                error!(vendor_name = %vendor.name, "Vendor is closed");
                return Err(OrderError::VendorClosed(vendor_id.to_owned()));
            }
            Ok(None) => {
                error!("Vendor not found");
                return Err(OrderError::UnknownVendor(vendor_id.to_owned()));
            }
            Err(e) => {
                error!(error = %e, "Vendor directory unavailable");
                return Err(OrderError::ActorClosed);
            }
        }

        // Step 3: create the order, then clear the cart
        let params = OrderCreate {
            student_id: student_id.to_owned(),
            vendor_id: vendor_id.to_owned(),
            items: cart.items().to_vec(),
            delivery_address: delivery_address.to_owned(),
        };
        let order_id = self.inner.create(params).await?;
        cart.take_items();

        info!(order_id = %order_id, "Order placed");
        Ok(order_id)
    }

    /// Advances an order along its lifecycle on behalf of an actor. All
    /// validation lives in the order entity; an invalid or unauthorized
    /// request leaves the order untouched.
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        order_id: String,
        target: OrderStatus,
        actor_role: UserRole,
        actor_id: String,
    ) -> Result<Order, OrderError> {
        let result = self
            .inner
            .perform_action(
                order_id,
                OrderAction::Transition {
                    target,
                    actor_role,
                    actor_id,
                },
            )
            .await?;
        let OrderActionResult::Transitioned(order) = result;
        Ok(order)
    }

    /// A student backing out of an order the vendor has not yet accepted.
    #[instrument(skip(self))]
    pub async fn cancel_order(
        &self,
        order_id: String,
        student_id: String,
    ) -> Result<Order, OrderError> {
        self.update_status(
            order_id,
            OrderStatus::Cancelled,
            UserRole::Student,
            student_id,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, id: String) -> Result<Option<Order>, OrderError> {
        self.inner.get(id).await
    }

    #[instrument(skip(self))]
    pub async fn orders_for_student(&self, student_id: String) -> Result<Vec<Order>, OrderError> {
        self.inner
            .list(Some(OrderQuery::ForStudent(student_id)))
            .await
    }

    #[instrument(skip(self))]
    pub async fn orders_for_vendor(&self, vendor_id: String) -> Result<Vec<Order>, OrderError> {
        self.inner.list(Some(OrderQuery::ForVendor(vendor_id))).await
    }

    /// Orders in one status across all vendors. With
    /// [`OrderStatus::ReadyForPickup`] this is the riders' available feed.
    #[instrument(skip(self))]
    pub async fn orders_in_status(&self, status: OrderStatus) -> Result<Vec<Order>, OrderError> {
        self.inner.list(Some(OrderQuery::InStatus(status))).await
    }

    /// The deliveries a rider has accepted and not yet dropped off.
    #[instrument(skip(self))]
    pub async fn deliveries_in_transit(&self, rider_id: String) -> Result<Vec<Order>, OrderError> {
        self.inner
            .list(Some(OrderQuery::InTransitWith(rider_id)))
            .await
    }
}
