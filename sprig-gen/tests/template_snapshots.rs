//! Snapshot tests for rendered artifact templates.

use sprig_core::GeneratedFile;
use sprig_gen::files::{ControllerTs, ModuleTs, ServiceTs};

#[test]
fn test_service_template() {
    insta::assert_snapshot!(ServiceTs::new("user-profile").render(), @r"
    import { Injectable } from '@nestjs/common';
    import { BaseService, CatchServiceErrors } from 'src/common';

    @Injectable()
    @CatchServiceErrors()
    export class UserProfileService extends BaseService {
    }
    ");
}

#[test]
fn test_controller_template_with_sibling() {
    let rendered = ControllerTs::new("user-profile", vec!["UserProfileService".to_string()]).render();
    insta::assert_snapshot!(rendered, @r"
    import { Controller, Inject } from '@nestjs/common';
    import { BaseController } from 'src/common';
    import { UserProfileService } from './user-profile.service';

    @Controller('user-profile')
    export class UserProfileController extends BaseController {
      @Inject(UserProfileService) private readonly userProfileService: UserProfileService;
    }
    ");
}

#[test]
fn test_module_template() {
    let rendered = ModuleTs::new(
        "billing",
        vec!["BillingController".to_string()],
        vec!["InvoiceService".to_string()],
    )
    .render();
    insta::assert_snapshot!(rendered, @r"
    import { Module } from '@nestjs/common';
    import { BillingController } from './billing.controller';
    import { InvoiceService } from './invoice.service';

    @Module({
        imports: [],
        controllers: [BillingController],
        providers: [InvoiceService],
        exports: [InvoiceService],
    })
    export class BillingModule {}
    ");
}
