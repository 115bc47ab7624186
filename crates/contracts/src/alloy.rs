pub mod networks {
    pub const SEPOLIA: u64 = 11155111;
    pub const AVALANCHE_FUJI: u64 = 43113;
}

/// Known deployments of the limit order contract.
pub mod deployments {
    use alloy::primitives::{Address, address};

    /// Used when neither the command line nor the configuration name a
    /// contract.
    pub const CCIP_LIMIT_ORDER: Address = address!("0x943a837698851f90696e20f009b3bdCB13eE4B27");
}

/// CCIP chain selectors of the networks the limit order contract is deployed
/// on. These are the identifiers the contract expects as destination chain,
/// not EVM chain ids.
pub mod chain_selectors {
    use super::networks;

    pub const SEPOLIA: u64 = 16015286601757825753;
    pub const AVALANCHE_FUJI: u64 = 14767482510784806043;

    const KNOWN: [(u64, u64); 2] = [
        (networks::SEPOLIA, SEPOLIA),
        (networks::AVALANCHE_FUJI, AVALANCHE_FUJI),
    ];

    /// Returns the EVM chain id a CCIP chain selector refers to.
    pub fn chain_id(selector: u64) -> Option<u64> {
        KNOWN
            .iter()
            .find_map(|(id, known)| (*known == selector).then_some(*id))
    }
}

#[macro_export]
macro_rules! bindings {
    ($contract:ident { $($body:tt)* }) => {
        paste::paste! {
            // Generate the main bindings in a private module. That allows
            // us to re-export all items in our own module while also adding
            // some items ourselves.
            #[allow(non_snake_case)]
            mod [<$contract Private>] {
                alloy::sol! {
                    #[allow(missing_docs)]
                    #[sol(rpc)]
                    #[derive(Debug, PartialEq, Eq)]
                    contract $contract {
                        $($body)*
                    }
                }
            }

            #[allow(non_snake_case)]
            pub mod $contract {
                use alloy::providers::DynProvider;

                pub use super::[<$contract Private>]::*;
                pub type Instance = $contract::[<$contract Instance>]<DynProvider>;
            }
        }
    };
}

crate::bindings!(CCIPLimitOrder {
    struct Party {
        bytes32 account;
        address token;
        uint256 amount;
    }

    struct Order {
        uint8 state;
        Party maker;
        Party taker;
    }

    struct EVMTokenAmount {
        address token;
        uint256 amount;
    }

    error FeeTooHigh(uint256 fee, uint256 maxFee);
    error InsufficientNative(uint256 value, uint256 fee);
    error InvalidAddress();
    error InvalidAmounts(uint256 makerAmount, uint256 takerAmount);
    error InvalidFeeRecipient(address feeRecipient);
    error InvalidFeeToken(address feeToken);
    error InvalidLength(uint256 expected, uint256 actual);
    error InvalidMakerFee(uint48 makerFee);
    error InvalidRouter(address router);
    error InvalidSender(bytes32 expectedSender, bytes32 actualSender);
    error InvalidState(uint8 expected, uint8 actual);
    error InvalidTaker(bytes32 expectedTaker, bytes32 actualTaker);
    error InvalidTakerFee(uint48 takerFee);
    error NativeTransferFailed();
    error SameFeeRecipient(address feeRecipient);
    error SameMakerFee(uint48 makerFee);
    error SameTakerFee(uint48 takerFee);
    error SameTargetContract(bytes32 targetContract);
    error SameTrustedTokenStatus(bool status);
    error UnsupportedChain(uint64 chainSelector);
    error UntrustedToken(address token);

    event CCIPActionReceived(uint8 action, uint256 indexed orderId);
    event MessageSent(bytes32 indexed messageId);
    event OrderCancelled(uint256 indexed orderId);
    event OrderCreated(uint256 indexed orderId, Party maker, Party taker);
    event OrderFilled(uint256 indexed orderId);
    event TokenStored(bytes32 indexed account, address indexed token, uint256 amount);
    event TokenWithdrawn(bytes32 indexed account, address indexed token, uint256 amount);
    event TokensSent(uint64 indexed chainSelector, bytes32 indexed account, EVMTokenAmount[] tokenAmounts);

    function BASIS_POINTS() external view returns (uint256);
    function MAX_FEE() external view returns (uint256);
    function currentChainSelector() external view returns (uint64);
    function getBalance(bytes32 account, address token) external view returns (uint256);
    function getOrder(uint256 orderId) external view returns (Order memory);
    function getMakerFee() external view returns (uint48);
    function getTakerFee() external view returns (uint48);
    function getFeeRecipient() external view returns (address);
    function getTargetContract(uint64 chainSelector) external view returns (bytes32);
    function isTrustedToken(address token) external view returns (bool);

    function createOrder(Party memory maker, Party memory taker) external returns (uint256);
    function cancelOrder(uint256 orderId) external returns (bool);
    function fillOrder(
        uint64 chainSelector,
        uint256 orderId,
        address token,
        uint256 amount,
        address feeToken,
        uint256 maxFee,
        uint256 gasLimit
    ) external payable returns (bool);
    function sendTokens(
        uint64 chainSelector,
        bytes32 account,
        EVMTokenAmount[] memory tokenAmounts,
        address feeToken,
        uint256 maxFee,
        uint256 gasLimit
    ) external payable returns (bool);
});

crate::bindings!(ERC20 {
    event Approval(address indexed owner, address indexed spender, uint256 value);

    function decimals() external view returns (uint8);
    function symbol() external view returns (string memory);
    function balanceOf(address account) external view returns (uint256);
    function allowance(address owner, address spender) external view returns (uint256);
    function approve(address spender, uint256 amount) external returns (bool);
});
