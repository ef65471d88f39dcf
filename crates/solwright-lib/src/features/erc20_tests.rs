use solwright_core::Catalog;

use super::erc20::premint_amount;
use super::*;
use crate::Error;

fn generate_erc20(opts: Erc20Options) -> String {
    generate(&GenericOptions::Erc20(opts), Catalog::builtin()).unwrap()
}

#[test]
fn burnable_pausable_mintable_with_permit() {
    let out = generate_erc20(Erc20Options {
        burnable: true,
        pausable: true,
        mintable: true,
        common: CommonOptions {
            access: Some(Access::Ownable),
            ..CommonOptions::default()
        },
        ..Erc20Options::default()
    });

    insta::assert_snapshot!(out, @r#"
    // SPDX-License-Identifier: MIT
    pragma solidity ^0.8.27;

    import {ERC20} from "@openzeppelin/contracts/token/ERC20/ERC20.sol";
    import {ERC20Burnable} from "@openzeppelin/contracts/token/ERC20/extensions/ERC20Burnable.sol";
    import {ERC20Pausable} from "@openzeppelin/contracts/token/ERC20/extensions/ERC20Pausable.sol";
    import {Ownable} from "@openzeppelin/contracts/access/Ownable.sol";
    import {ERC20Permit} from "@openzeppelin/contracts/token/ERC20/extensions/ERC20Permit.sol";

    contract MyToken is ERC20, ERC20Burnable, ERC20Pausable, Ownable, ERC20Permit {
        constructor(address initialOwner)
            ERC20("MyToken", "MTK")
            Ownable(initialOwner)
            ERC20Permit("MyToken")
        {}

        function pause() public onlyOwner {
            _pause();
        }

        function unpause() public onlyOwner {
            _unpause();
        }

        function mint(address to, uint256 amount) public onlyOwner {
            _mint(to, amount);
        }

        function _update(address from, address to, uint256 value) internal override(ERC20, ERC20Pausable) {
            super._update(from, to, value);
        }
    }
    "#);
}

#[test]
fn premint_and_roles() {
    let out = generate_erc20(Erc20Options {
        premint: Some("1000".to_string()),
        mintable: true,
        permit: false,
        common: CommonOptions {
            access: Some(Access::Roles),
            ..CommonOptions::default()
        },
        ..Erc20Options::default()
    });

    insta::assert_snapshot!(out, @r#"
    // SPDX-License-Identifier: MIT
    pragma solidity ^0.8.27;

    import {ERC20} from "@openzeppelin/contracts/token/ERC20/ERC20.sol";
    import {AccessControl} from "@openzeppelin/contracts/access/AccessControl.sol";

    contract MyToken is ERC20, AccessControl {
        bytes32 public constant MINTER_ROLE = keccak256("MINTER_ROLE");

        constructor(address recipient, address defaultAdmin, address minter)
            ERC20("MyToken", "MTK")
        {
            _mint(recipient, 1000 * 10 ** decimals());
            _grantRole(DEFAULT_ADMIN_ROLE, defaultAdmin);
            _grantRole(MINTER_ROLE, minter);
        }

        function mint(address to, uint256 amount) public onlyRole(MINTER_ROLE) {
            _mint(to, amount);
        }
    }
    "#);
}

#[test]
fn votes_with_permit_overrides_nonces() {
    let out = generate_erc20(Erc20Options {
        votes: true,
        ..Erc20Options::default()
    });

    assert!(out.contains("contract MyToken is ERC20, ERC20Permit, ERC20Votes {"));
    assert!(out.contains(r#"import {Nonces} from "@openzeppelin/contracts/utils/Nonces.sol";"#));
    assert!(out.contains(
        "    function nonces(address owner) public view override(ERC20Permit, Nonces) returns (uint256) {\n        return super.nonces(owner);\n    }\n"
    ));
    assert!(out.contains("internal override(ERC20, ERC20Votes) {"));
}

#[test]
fn votes_without_permit_adds_eip712() {
    let out = generate_erc20(Erc20Options {
        votes: true,
        permit: false,
        ..Erc20Options::default()
    });

    assert!(out.contains("contract MyToken is ERC20, EIP712, ERC20Votes {"));
    assert!(out.contains("        EIP712(\"MyToken\", \"1\")\n"));
    assert!(!out.contains("function nonces"));
}

#[test]
fn upgradeable_uups_token() {
    let out = generate_erc20(Erc20Options {
        pausable: true,
        permit: false,
        common: CommonOptions {
            upgradeable: Some(Upgradeable::Uups),
            ..CommonOptions::default()
        },
        ..Erc20Options::default()
    });

    insta::assert_snapshot!(out, @r#"
    // SPDX-License-Identifier: MIT
    pragma solidity ^0.8.27;

    import {Initializable} from "@openzeppelin/contracts-upgradeable/proxy/utils/Initializable.sol";
    import {ERC20Upgradeable} from "@openzeppelin/contracts-upgradeable/token/ERC20/ERC20Upgradeable.sol";
    import {ERC20PausableUpgradeable} from "@openzeppelin/contracts-upgradeable/token/ERC20/extensions/ERC20PausableUpgradeable.sol";
    import {OwnableUpgradeable} from "@openzeppelin/contracts-upgradeable/access/OwnableUpgradeable.sol";
    import {UUPSUpgradeable} from "@openzeppelin/contracts-upgradeable/proxy/utils/UUPSUpgradeable.sol";

    contract MyToken is Initializable, ERC20Upgradeable, ERC20PausableUpgradeable, OwnableUpgradeable, UUPSUpgradeable {
        /// @custom:oz-upgrades-unsafe-allow constructor
        constructor() {
            _disableInitializers();
        }

        function initialize(address initialOwner) public initializer {
            __ERC20_init("MyToken", "MTK");
            __ERC20Pausable_init();
            __Ownable_init(initialOwner);
        }

        function pause() public onlyOwner {
            _pause();
        }

        function unpause() public onlyOwner {
            _unpause();
        }

        function _authorizeUpgrade(address newImplementation) internal onlyOwner override {}

        function _update(address from, address to, uint256 value) internal override(ERC20Upgradeable, ERC20PausableUpgradeable) {
            super._update(from, to, value);
        }
    }
    "#);
}

#[test]
fn premint_amounts() {
    assert_eq!(
        premint_amount("1000").unwrap().as_deref(),
        Some("1000 * 10 ** decimals()")
    );
    assert_eq!(
        premint_amount("1.5").unwrap().as_deref(),
        Some("15 * 10 ** (decimals() - 1)")
    );
    assert_eq!(
        premint_amount("0.250").unwrap().as_deref(),
        Some("25 * 10 ** (decimals() - 2)")
    );
    assert_eq!(premint_amount("").unwrap(), None);
    assert_eq!(premint_amount("0").unwrap(), None);
    assert_eq!(premint_amount("0.000").unwrap(), None);
}

#[test]
fn invalid_premint_is_rejected() {
    for value in ["abc", "1e3", "-5", ".", "1.2.3"] {
        assert_eq!(
            premint_amount(value),
            Err(Error::InvalidOption {
                option: "premint",
                value: value.to_string()
            }),
            "{value}"
        );
    }
    assert!(premint_amount("0.0000000000000000001").is_err());
}

#[test]
fn zero_premint_adds_no_recipient() {
    let model = erc20::build_erc20(
        &Erc20Options {
            premint: Some("0".to_string()),
            ..Erc20Options::default()
        },
        Catalog::builtin(),
    )
    .unwrap();

    assert!(model.constructor().is_empty());
}
