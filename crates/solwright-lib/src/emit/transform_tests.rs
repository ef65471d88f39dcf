use super::transform::{emitted_name, init_function, upgradeable_name, upgradeable_path};

#[test]
fn names_gain_upgradeable_suffix() {
    assert_eq!(upgradeable_name("ERC20Burnable"), "ERC20BurnableUpgradeable");
    assert_eq!(init_function("ERC20Burnable"), "__ERC20Burnable_init");
}

#[test]
fn paths_move_to_upgradeable_package() {
    assert_eq!(
        upgradeable_path("@openzeppelin/contracts/token/ERC20/ERC20.sol"),
        "@openzeppelin/contracts-upgradeable/token/ERC20/ERC20Upgradeable.sol"
    );
    assert_eq!(
        upgradeable_path("@openzeppelin/contracts/utils/Nonces.sol"),
        "@openzeppelin/contracts-upgradeable/utils/NoncesUpgradeable.sol"
    );
}

#[test]
fn foreign_paths_keep_their_prefix() {
    assert_eq!(upgradeable_path("./Vault.sol"), "./VaultUpgradeable.sol");
    assert_eq!(upgradeable_path("vault"), "vault");
}

#[test]
fn emitted_name_depends_on_build_and_entry() {
    assert_eq!(emitted_name("ERC20", true, true), "ERC20Upgradeable");
    assert_eq!(emitted_name("ERC20", true, false), "ERC20");
    assert_eq!(emitted_name("UUPSUpgradeable", false, true), "UUPSUpgradeable");
}
