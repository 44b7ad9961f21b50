use alloy::sol;

sol! {
    /// Dynamic fee handler.
    ///
    /// Decodes the packed oracle fee data, verifies the oracle signature and computes the fee for
    /// a deposit.
    #[sol(rpc)]
    #[derive(Debug)]
    interface IDynamicFeeHandler {
        /// Calculates the fee for a deposit.
        ///
        /// `feeData` is the packed oracle quote followed by the token amount.
        function calculateFee(
            address sender,
            uint8 fromDomainID,
            uint8 destinationDomainID,
            bytes32 resourceID,
            bytes calldata depositData,
            bytes calldata feeData
        ) external view returns (uint256 fee, address tokenAddress);
    }
}
