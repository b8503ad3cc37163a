use crate::{
    bridge::TezosBridge,
    error::BridgeError,
    types::{Account, BroadcastHandle, Transaction},
};
use tracing::{info, instrument};

impl TezosBridge {
    /// Signs `transaction` on the device `device_id` and submits it to the network.
    ///
    /// Engine failures are returned unmodified, retrying is up to the caller.
    #[instrument(skip_all, fields(account = %account.id, device = %device_id))]
    pub async fn sign_and_broadcast(
        &self,
        account: &Account,
        transaction: &Transaction,
        device_id: &str,
    ) -> Result<BroadcastHandle, BridgeError> {
        let handle = self.engine.sign_and_broadcast(account, transaction, device_id).await?;
        info!(hash = %handle.hash, "Broadcast transaction");
        Ok(handle)
    }
}
