pub mod const_config {
    use anchor_lang::solana_program::pubkey::Pubkey;
    use const_crypto::ed25519;

    use crate::constants::LAUNCH_CONFIG_SEED;

    const LAUNCH_CONFIG_AND_BUMP: ([u8; 32], u8) =
        ed25519::derive_program_address(&[LAUNCH_CONFIG_SEED], &crate::ID_CONST.to_bytes());

    pub const CONFIG_ID: Pubkey = Pubkey::new_from_array(LAUNCH_CONFIG_AND_BUMP.0);
}
