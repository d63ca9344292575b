use async_trait::async_trait;
use ethereum_types::{Address, U64};
use tracing::debug;
use web3::{
    transports::Http,
    types::{BlockId, BlockNumber, Bytes, CallRequest},
    Web3,
};

use crate::oracle::{CallError, VerifierOracle};
use crate::Result;

/// Reaches verifier routines over JSON-RPC with `eth_call`
///
/// `eth_call` executes against a throwaway copy of the chain state, so the routine cannot mutate
/// anything. Calls are not retried.
#[derive(Debug, Clone)]
pub struct Client {
    client: Web3<Http>,
    /// The ethereum block height used for all calls.
    /// If None, the latest block is used.
    block_height: Option<U64>,
}

impl Client {
    pub fn new(rpc: &str) -> Result<Client> {
        let client = Web3::new(Http::new(rpc)?);

        Ok(Client {
            client,
            block_height: None,
        })
    }

    pub fn at_height(mut self, block_height: Option<u64>) -> Self {
        self.block_height = block_height.map(|x| x.into());
        self
    }

    fn block(&self) -> Option<BlockId> {
        self.block_height
            .map(|height| BlockId::Number(BlockNumber::Number(height)))
    }
}

#[async_trait]
impl VerifierOracle for Client {
    #[tracing::instrument(err, skip(self, calldata), fields(calldata_len = calldata.len()))]
    async fn static_call(&self, handle: Address, calldata: Vec<u8>) -> Result<Vec<u8>, CallError> {
        let request = CallRequest {
            to: Some(handle),
            data: Some(Bytes(calldata)),
            ..Default::default()
        };

        match self.client.eth().call(request, self.block()).await {
            Ok(Bytes(output)) => {
                debug!(output_len = output.len(), "eth_call returned");
                Ok(output)
            }
            Err(err) => Err(classify(err)),
        }
    }
}

/// Separates reverts reported by the node from transport and decoding failures
fn classify(err: web3::Error) -> CallError {
    match err {
        web3::Error::Rpc(rpc) if rpc.message.contains("revert") => {
            let data = rpc
                .data
                .as_ref()
                .and_then(|data| data.as_str())
                .and_then(|data| hex::decode(data.trim_start_matches("0x")).ok())
                .unwrap_or_default();

            CallError::Reverted(data)
        }
        err => CallError::Web3(err),
    }
}
